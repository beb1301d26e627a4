// src/lib.rs

pub mod c_api;
pub mod core;
pub mod error;
pub mod languages;
pub mod persistence;
pub mod registry;

pub use crate::core::classifier::Mode;
pub use crate::core::engine::NumberEngine;
pub use crate::core::types::{NumberInput, Vocabulary};
pub use crate::error::NumWordsError;
pub use crate::persistence::LanguagePack;
pub use crate::registry::LanguageRegistry;
