use crossterm::style::Stylize;
use numwords_core::{LanguageRegistry, Mode};
use std::io::{stdin, stdout, Write};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = LanguageRegistry::with_builtin_languages();
    let mut lang = String::from("hi");
    let mut mode: Option<Mode> = None;

    println!("{}", "Indic Number-to-Words Converter. Type ':quit' to exit.".bold());
    println!("---------------------------------------------------------------");
    println!("Commands: ':lang <code>', ':mode currency|individual|auto', ':languages'");
    println!("Anything else converts in the current language.\n");

    loop {
        let mode_label = match mode {
            Some(Mode::Currency) => "currency",
            Some(Mode::Individual) => "individual",
            None => "auto",
        };
        print!("{} ", format!("[{lang}/{mode_label}]>").green());
        stdout().flush().unwrap();

        let mut line = String::new();
        if stdin().read_line(&mut line).unwrap() == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            ":quit" | ":exit" => break,
            ":languages" => {
                for (code, name) in registry.supported_languages() {
                    println!("  {code}  {name}");
                }
            }
            cmd if cmd.starts_with(":lang ") => {
                let code = cmd[6..].trim();
                if registry.contains(code) {
                    lang = code.to_string();
                } else {
                    println!("{}", format!("Unknown language '{code}'.").red());
                }
            }
            cmd if cmd.starts_with(":mode ") => {
                mode = Mode::from_flag(cmd[6..].trim());
            }
            value => match registry.convert(value, &lang, mode) {
                Ok(words) => println!("{}", words.cyan()),
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
    }
}
