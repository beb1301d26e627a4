// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::NumWordsError;

/// Language-specific word data. Constructed once per language, read-only for
/// the engine's lifetime, safe to share across concurrent callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Word for every directly-nameable value. Must cover each integer the
    /// currency renderer can bottom out at (0-99 at minimum); compound forms
    /// like "forty two" are single atoms.
    pub atoms: HashMap<u64, String>,
    /// (breakpoint, word) pairs, strictly descending by breakpoint,
    /// e.g. (10000000, "crore"), (100000, "lakh"), (1000, "thousand").
    pub magnitudes: Vec<(u64, String)>,
    /// Uppercase letter to its spoken form, used in individual mode.
    #[serde(default)]
    pub alphabet: HashMap<char, String>,
    /// Word announcing the fractional separator.
    #[serde(default = "default_decimal_point")]
    pub decimal_point: String,
    /// Spoken word boundary.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_decimal_point() -> String {
    "point".to_string()
}

fn default_separator() -> String {
    " ".to_string()
}

impl Vocabulary {
    /// Completeness check for externally supplied data. The built-in tables
    /// skip this; the registry runs it on every loaded pack.
    pub fn validate(&self) -> Result<(), NumWordsError> {
        for value in 0..=99u64 {
            if !self.atoms.contains_key(&value) {
                return Err(NumWordsError::InvalidVocabulary(format!(
                    "missing atom for {value}"
                )));
            }
        }
        if self.magnitudes.is_empty() {
            return Err(NumWordsError::InvalidVocabulary(
                "no magnitudes defined".to_string(),
            ));
        }
        for pair in self.magnitudes.windows(2) {
            if pair[1].0 >= pair[0].0 {
                return Err(NumWordsError::InvalidVocabulary(format!(
                    "magnitudes not strictly descending at breakpoint {}",
                    pair[1].0
                )));
            }
        }
        // Every value below the smallest breakpoint must resolve via atoms.
        let smallest = self.magnitudes.last().map(|(value, _)| *value).unwrap_or(0);
        if smallest > 100 {
            return Err(NumWordsError::InvalidVocabulary(format!(
                "smallest magnitude {smallest} leaves values the atoms cannot cover"
            )));
        }
        Ok(())
    }
}

/// Raw input accepted by the engine: a native integer or free-form text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberInput {
    Integer(u64),
    Text(String),
}

impl NumberInput {
    /// The classifier works on the stringified form regardless of origin.
    pub(crate) fn into_text(self) -> String {
        match self {
            NumberInput::Integer(n) => n.to_string(),
            NumberInput::Text(s) => s,
        }
    }
}

macro_rules! input_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for NumberInput {
            fn from(value: $ty) -> Self {
                NumberInput::Integer(value as u64)
            }
        })*
    };
}

input_from_unsigned!(u8, u16, u32, u64, usize);

// Negative values go through the text path, where the leading '-' counts as
// a separator, same as any other hyphenated input.
impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        match u64::try_from(value) {
            Ok(n) => NumberInput::Integer(n),
            Err(_) => NumberInput::Text(value.to_string()),
        }
    }
}

impl From<i32> for NumberInput {
    fn from(value: i32) -> Self {
        NumberInput::from(i64::from(value))
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}
