//! # Word Tokenizer

use crate::{errors::WFResult, tokenize::DocumentTokenizer};

/// The default punctuation filter set.
///
/// Every character in this set is replaced by the split character before splitting.
/// The apostrophe is deliberately absent, so "don't" stays one token.
pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// Word-level tokenizer.
///
/// Text is optionally lowercased, filter characters are mapped to the
/// split character, and the result is split with empty pieces dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct WordTokenizer {
    /// Lowercase the text before splitting.
    pub lowercase: bool,

    /// Characters replaced by [`split`](Self::split).
    pub filters: String,

    /// The separator character.
    pub split: char,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self {
            lowercase: true,
            filters: DEFAULT_FILTERS.to_string(),
            split: ' ',
        }
    }
}

impl WordTokenizer {
    /// Set whether text is lowercased.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Set the filter character set.
    pub fn with_filters<S: Into<String>>(
        self,
        filters: S,
    ) -> Self {
        Self {
            filters: filters.into(),
            ..self
        }
    }

    /// Set the split character.
    pub fn with_split(
        self,
        split: char,
    ) -> Self {
        Self { split, ..self }
    }
}

impl DocumentTokenizer for WordTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> WFResult<Vec<String>> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let text: String = text
            .chars()
            .map(|c| {
                if self.filters.contains(c) {
                    self.split
                } else {
                    c
                }
            })
            .collect();

        Ok(text
            .split(self.split)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_default_tokenizer() {
        let tokenizer = WordTokenizer::default();

        assert_eq!(
            tokenizer.tokenize("WASHINGTON - The Department of Justice announced...").unwrap(),
            words(&["washington", "the", "department", "of", "justice", "announced"])
        );

        assert_eq!(
            tokenizer.tokenize("Don't\tstop\nnow,  please").unwrap(),
            words(&["don't", "stop", "now", "please"])
        );

        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize(" ... ").unwrap().is_empty());
    }

    #[test]
    fn test_options() {
        let tokenizer = WordTokenizer::default()
            .with_lowercase(false)
            .with_filters("")
            .with_split('|');

        assert_eq!(
            tokenizer.tokenize("A.b||C d").unwrap(),
            words(&["A.b", "C d"])
        );
    }
}
