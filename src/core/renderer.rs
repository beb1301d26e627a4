// File: src/core/renderer.rs
use crate::core::types::Vocabulary;

/// Renders classified values into word strings against a borrowed vocabulary.
pub(crate) struct WordRenderer<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> WordRenderer<'a> {
    pub(crate) fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Grouped magnitude reading. Each recursive call strictly decreases the
    /// value, so depth is bounded by the magnitude tier count (~5 for Indian
    /// numbering up to crores).
    pub(crate) fn currency(&self, number: u64) -> String {
        // Base case: directly-nameable value.
        if let Some(atom) = self.vocabulary.atoms.get(&number) {
            return atom.clone();
        }

        let sep = &self.vocabulary.separator;
        for (value, name) in &self.vocabulary.magnitudes {
            if number >= *value {
                let quotient = number / value;
                let remainder = number % value;
                let mut result = format!("{}{}{}", self.currency(quotient), sep, name);
                if remainder > 0 {
                    result.push_str(sep);
                    result.push_str(&self.currency(remainder));
                }
                return trim_separator(&result, sep).to_string();
            }
        }

        // Unreachable with atoms covering 0-99 and a magnitude table down to
        // 100; read the digits out instead of failing.
        self.individual(&number.to_string())
    }

    /// Character-by-character reading. Digits and letters become words;
    /// separators contribute nothing; letters missing from the alphabet pass
    /// through unchanged.
    pub(crate) fn individual(&self, text: &str) -> String {
        let mut words: Vec<String> = Vec::new();

        for c in text.chars() {
            if let Some(digit) = c.to_digit(10) {
                if let Some(atom) = self.vocabulary.atoms.get(&u64::from(digit)) {
                    words.push(atom.clone());
                }
            } else if c.is_alphabetic() {
                let key = if c.is_ascii_alphabetic() {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                match self.vocabulary.alphabet.get(&key) {
                    Some(word) => words.push(word.clone()),
                    None => words.push(c.to_string()),
                }
            }
            // Everything else ('-', ' ', '.', ',') is a skip character.
        }

        words.join(&self.vocabulary.separator)
    }

    /// Integer part read as currency, fraction read digit-by-digit, joined by
    /// the decimal marker word.
    pub(crate) fn decimal(&self, integer: u64, fraction: &str) -> String {
        let sep = &self.vocabulary.separator;
        format!(
            "{}{}{}{}{}",
            self.currency(integer),
            sep,
            self.vocabulary.decimal_point,
            sep,
            self.individual(fraction)
        )
    }
}

fn trim_separator<'a>(mut text: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return text;
    }
    while let Some(rest) = text.strip_prefix(separator) {
        text = rest;
    }
    while let Some(rest) = text.strip_suffix(separator) {
        text = rest;
    }
    text
}
