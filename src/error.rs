// File: src/error.rs
use thiserror::Error;

/// Errors surfaced by the registry and the language pack loader.
///
/// Conversion itself never fails: malformed numeric input falls back to
/// individual rendering and alphabet misses pass the raw character through.
#[derive(Debug, Error)]
pub enum NumWordsError {
    #[error("language '{code}' not supported. Available: {}", .available.join(", "))]
    UnsupportedLanguage {
        code: String,
        available: Vec<String>,
    },

    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON pack: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed binary pack: {0}")]
    Pack(#[from] bincode::Error),
}
