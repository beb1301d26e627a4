use numwords_core::{LanguageRegistry, Mode};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn get_log_path() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("numwords_simulator.log");
    path
}

fn log(message: &str) {
    if let Ok(mut file) = File::options().create(true).append(true).open(get_log_path()) {
        let _ = writeln!(file, "{}", message);
    }
}

// Line protocol for host processes:
//   CONVERT <lang> <currency|individual|auto> <input...>
//   LANGUAGES
//   EXIT
fn main() -> io::Result<()> {
    // Clear old log file
    let _ = std::fs::remove_file(get_log_path());
    log("--- Numwords Engine Starting ---");

    let registry = LanguageRegistry::with_builtin_languages();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        log(&format!("Host <- '{:?}'", input));
        let parts: Vec<&str> = input.splitn(4, ' ').collect();
        let command = parts.first().cloned().unwrap_or("");

        match command {
            "CONVERT" => {
                let lang = parts.get(1).cloned().unwrap_or("hi");
                let mode = Mode::from_flag(parts.get(2).cloned().unwrap_or("auto"));
                let value = parts.get(3).cloned().unwrap_or("");

                let reply = match registry.convert(value, lang, mode) {
                    Ok(words) => format!("RESULT {}", words),
                    Err(e) => format!("ERROR {}", e),
                };
                log(&format!("Host -> '{:?}'", reply));
                writeln!(stdout, "{}", reply)?;
                stdout.flush()?;
            }
            "LANGUAGES" => {
                for (code, name) in registry.supported_languages() {
                    writeln!(stdout, "LANGUAGE {} {}", code, name)?;
                }
                writeln!(stdout, "END")?;
                stdout.flush()?;
            }
            "EXIT" => {
                log("Host: Received EXIT.");
                break;
            }
            _ => {
                log("Host: Received unknown command.");
            }
        }
    }
    log("Host: Shutting down.");
    Ok(())
}
