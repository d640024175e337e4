//! # Document Tokenizers
//!
//! Tokenization sits outside the framing core; it is reached only through
//! the [`DocumentTokenizer`] trait. Two stock tokenizers are provided:
//! * [`WordTokenizer`] - lowercase, strip a punctuation filter set, split on a character.
//! * [`RegexTokenizer`] - every regex match is a token.

mod regex_tokenizer;
mod word_tokenizer;

#[doc(inline)]
pub use regex_tokenizer::{DEFAULT_WORD_PATTERN, RegexTokenizer};
#[doc(inline)]
pub use word_tokenizer::{DEFAULT_FILTERS, WordTokenizer};

use crate::errors::WFResult;

/// Splits raw text into a document of tokens.
pub trait DocumentTokenizer: Send + Sync {
    /// Tokenize `text` into an ordered token sequence.
    ///
    /// ## Returns
    /// Every token of `text`, or an error; never a partial sequence.
    fn tokenize(
        &self,
        text: &str,
    ) -> WFResult<Vec<String>>;

    /// Tokenize a batch of texts.
    ///
    /// Stops at the first text which fails.
    fn tokenize_batch<I>(
        &self,
        texts: I,
    ) -> WFResult<Vec<Vec<String>>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        Self: Sized,
    {
        texts
            .into_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }
}

impl<D: DocumentTokenizer + ?Sized> DocumentTokenizer for &D {
    fn tokenize(
        &self,
        text: &str,
    ) -> WFResult<Vec<String>> {
        (**self).tokenize(text)
    }
}

impl<D: DocumentTokenizer + ?Sized> DocumentTokenizer for std::sync::Arc<D> {
    fn tokenize(
        &self,
        text: &str,
    ) -> WFResult<Vec<String>> {
        (**self).tokenize(text)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_dyn_tokenizers() {
        let tokenizers: Vec<Arc<dyn DocumentTokenizer>> = vec![
            Arc::new(WordTokenizer::default()),
            Arc::new(RegexTokenizer::default()),
        ];

        for tokenizer in tokenizers {
            assert_eq!(
                tokenizer.tokenize("Hello, world").unwrap(),
                vec!["hello".to_string(), "world".to_string()]
            );
        }
    }

    #[test]
    fn test_tokenize_batch() {
        let tokenizer = WordTokenizer::default();
        let docs = tokenizer.tokenize_batch(["a b", "", "c"]).unwrap();
        assert_eq!(
            docs,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec![],
                vec!["c".to_string()],
            ]
        );
    }
}
