// File: src/registry.rs
use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::core::classifier::Mode;
use crate::core::engine::NumberEngine;
use crate::core::types::{NumberInput, Vocabulary};
use crate::error::NumWordsError;
use crate::languages;
use crate::persistence::{self, LanguagePack};

struct LanguageEntry {
    name: String,
    engine: NumberEngine,
}

/// Code -> engine lookup, constructed once at startup and shared by reference.
/// Vocabularies are immutable after registration, so lookups and conversions
/// need no synchronization.
pub struct LanguageRegistry {
    languages: BTreeMap<String, LanguageEntry>,
}

impl LanguageRegistry {
    pub fn empty() -> Self {
        Self {
            languages: BTreeMap::new(),
        }
    }

    /// Registry preloaded with the built-in vocabularies.
    pub fn with_builtin_languages() -> Self {
        let mut registry = Self::empty();
        // Built-in tables are checked by their own tests; no validation pass.
        registry.insert("en", "English", languages::en::vocabulary());
        registry.insert("hi", "Hindi", languages::hi::vocabulary());
        registry
    }

    fn insert(&mut self, code: &str, name: &str, vocabulary: Vocabulary) {
        debug!(code, name, "language registered");
        self.languages.insert(
            code.to_string(),
            LanguageEntry {
                name: name.to_string(),
                engine: NumberEngine::from_vocabulary(vocabulary),
            },
        );
    }

    /// Registers an externally supplied vocabulary after validating its
    /// completeness. Re-registering a code replaces the previous entry.
    pub fn register(
        &mut self,
        code: &str,
        name: &str,
        vocabulary: Vocabulary,
    ) -> Result<(), NumWordsError> {
        vocabulary.validate()?;
        self.insert(code, name, vocabulary);
        Ok(())
    }

    pub fn register_pack(&mut self, pack: LanguagePack) -> Result<(), NumWordsError> {
        self.register(&pack.code, &pack.name, pack.vocabulary)
    }

    /// Loads a pack from disk and registers it. `.json` files load as the
    /// human-authored format, anything else as the compiled binary format.
    pub fn load_pack_file(&mut self, path: &Path) -> Result<(), NumWordsError> {
        let pack = if path.extension().is_some_and(|ext| ext == "json") {
            persistence::load_json_pack(path)?
        } else {
            persistence::load_pack(path)?
        };
        self.register_pack(pack)
    }

    /// The engine for a language code, or the unsupported-language error
    /// carrying the code and the valid alternatives.
    pub fn engine(&self, code: &str) -> Result<&NumberEngine, NumWordsError> {
        self.languages
            .get(code)
            .map(|entry| &entry.engine)
            .ok_or_else(|| NumWordsError::UnsupportedLanguage {
                code: code.to_string(),
                available: self.languages.keys().cloned().collect(),
            })
    }

    /// Convert `input` to words in the given language.
    pub fn convert<I: Into<NumberInput>>(
        &self,
        input: I,
        code: &str,
        mode: Option<Mode>,
    ) -> Result<String, NumWordsError> {
        Ok(self.engine(code)?.convert(input, mode))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// (code, human-readable name) pairs in code order.
    pub fn supported_languages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages
            .iter()
            .map(|(code, entry)| (code.as_str(), entry.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
