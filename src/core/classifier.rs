// File: src/core/classifier.rs
use tracing::debug;

/// Conversion mode a caller may force. Absent, the shape heuristics decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Currency,
    Individual,
}

impl Mode {
    /// Parses the external mode flag; anything unrecognized means no override.
    pub fn from_flag(flag: &str) -> Option<Mode> {
        match flag {
            "currency" => Some(Mode::Currency),
            "individual" => Some(Mode::Individual),
            _ => None,
        }
    }
}

/// Outcome of classification: what to render, and how. Produced per call and
/// consumed immediately by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedInput {
    Currency(u64),
    Individual(String),
    /// Integer part plus the fractional digits kept verbatim, because
    /// "0.50" and "0.5" read differently.
    Decimal { integer: u64, fraction: String },
}

/// Grouping separators tolerated inside numeric input.
fn strip_grouping(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, ',' | ' ' | '-')).collect()
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Classify raw input. Precedence: alphabetic content always reads
/// individually and a dot always reads as a decimal, both regardless of any
/// override; only then does the override (or, absent one, the shape
/// heuristics) pick between currency and individual.
pub fn classify(text: &str, mode_override: Option<Mode>) -> ClassifiedInput {
    // Letters first, so "v1.2.3" never takes the decimal branch.
    if text.chars().any(|c| c.is_alphabetic()) {
        return ClassifiedInput::Individual(text.to_string());
    }

    if let Some(dot) = text.find('.') {
        let integer_part = strip_grouping(&text[..dot]);
        // Empty or unparseable integer part defaults to 0. The fraction is
        // everything after the first dot; later dots survive here and are
        // skipped by the individual renderer.
        let integer = if is_all_digits(&integer_part) {
            integer_part.parse().unwrap_or(0)
        } else {
            0
        };
        let fraction = text[dot + 1..].to_string();
        debug!(integer, fraction = %fraction, "decimal input detected");
        return ClassifiedInput::Decimal { integer, fraction };
    }

    let mode = match mode_override {
        Some(mode) => mode,
        None => {
            let stripped = strip_grouping(text);
            if text.starts_with('0') && text.len() > 1 && is_all_digits(&stripped) {
                // Phone-number-like input: the leading zeros stay verbatim.
                return ClassifiedInput::Individual(text.to_string());
            } else if text.contains(' ') || text.contains('-') {
                Mode::Individual
            } else {
                // A comma, or nothing distinctive at all: currency.
                Mode::Currency
            }
        }
    };

    let cleaned = strip_grouping(text);
    if is_all_digits(&cleaned) {
        if let Ok(value) = cleaned.parse::<u64>() {
            debug!(?mode, value, "input classified");
            return match mode {
                Mode::Currency => ClassifiedInput::Currency(value),
                // An explicit individual override reads the parsed digits;
                // leading zeros and separators drop here.
                Mode::Individual => ClassifiedInput::Individual(value.to_string()),
            };
        }
    }

    // Unparseable numeric-looking input (junk characters, or digit runs past
    // the u64 range) reads out character by character.
    ClassifiedInput::Individual(text.to_string())
}
