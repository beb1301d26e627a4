use std::sync::Arc;

use crate::core::classifier::{classify, ClassifiedInput, Mode};
use crate::core::renderer::WordRenderer;
use crate::core::types::{NumberInput, Vocabulary};

/// A per-language conversion engine: the classify -> render pipeline over a
/// shared, immutable vocabulary. Holds no other state, so a single instance
/// serves any number of concurrent callers.
#[derive(Clone)]
pub struct NumberEngine {
    vocabulary: Arc<Vocabulary>,
}

impl NumberEngine {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn from_vocabulary(vocabulary: Vocabulary) -> Self {
        Self::new(Arc::new(vocabulary))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Convert input to words.
    ///
    /// `mode` forces currency or individual reading; left out, the input's
    /// shape decides. Alphabetic content always reads individually and a
    /// dotted number always reads as a decimal, both regardless of `mode`.
    /// Empty input yields an empty string.
    pub fn convert<I: Into<NumberInput>>(&self, input: I, mode: Option<Mode>) -> String {
        let text = input.into().into_text();
        let renderer = WordRenderer::new(&self.vocabulary);

        match classify(&text, mode) {
            ClassifiedInput::Currency(value) => renderer.currency(value),
            ClassifiedInput::Individual(text) => renderer.individual(&text),
            ClassifiedInput::Decimal { integer, fraction } => {
                renderer.decimal(integer, &fraction)
            }
        }
    }
}
