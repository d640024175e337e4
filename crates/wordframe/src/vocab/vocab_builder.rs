//! # Vocabulary Builder

use compact_str::CompactString;

use crate::{
    errors::{WFResult, WordframeError},
    tokenize::DocumentTokenizer,
    types::{TokenType, WFHashMap, hash_map_with_capacity},
    vocab::Vocabulary,
};

/// Options for [`VocabularyBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyOptions {
    /// The maximum number of tokens kept; `K`.
    pub max_size: usize,
}

impl VocabularyOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_size` - the maximum vocabulary size; must be > 0.
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    /// Sets the maximum vocabulary size.
    pub fn with_max_size(
        self,
        max_size: usize,
    ) -> Self {
        Self { max_size }
    }

    /// Check the options.
    ///
    /// ## Returns
    /// [`WordframeError::InvalidConfiguration`] if `max_size` is 0.
    pub fn validate(&self) -> WFResult<()> {
        if self.max_size == 0 {
            return Err(WordframeError::InvalidConfiguration(
                "max vocabulary size must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Initializes a [`VocabularyBuilder`] from these options.
    pub fn init(self) -> VocabularyBuilder {
        VocabularyBuilder::new(self)
    }
}

/// Token frequency counter which freezes into a [`Vocabulary`].
///
/// Tokens are ranked by descending count; equal counts keep
/// first-encountered order. The top `max_size` tokens are kept.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    /// Builder options.
    pub options: VocabularyOptions,

    /// ``(token, count)`` in first-seen order.
    entries: Vec<(CompactString, u64)>,

    /// Map of ``{ token -> entries index }``.
    index: WFHashMap<CompactString, usize>,

    num_documents: usize,
    num_tokens: u64,
}

impl VocabularyBuilder {
    /// Create a new, empty builder.
    pub fn new(options: VocabularyOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            index: hash_map_with_capacity(1024),
            num_documents: 0,
            num_tokens: 0,
        }
    }

    /// The number of documents seen.
    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// The number of tokens seen, counting repeats.
    pub fn num_tokens(&self) -> u64 {
        self.num_tokens
    }

    /// The number of distinct tokens seen.
    pub fn num_distinct(&self) -> usize {
        self.entries.len()
    }

    /// Get the count for a token.
    pub fn count(
        &self,
        token: &str,
    ) -> u64 {
        self.index
            .get(token)
            .map(|&idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    fn add_token(
        &mut self,
        token: &str,
    ) {
        self.num_tokens += 1;
        match self.index.get(token) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                let key = CompactString::from(token);
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count the tokens of one document.
    pub fn update_from_document<I, S>(
        &mut self,
        document: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.num_documents += 1;
        for token in document {
            self.add_token(token.as_ref());
        }
    }

    /// Count the tokens of many documents.
    pub fn update_from_documents<D, I, S>(
        &mut self,
        documents: D,
    ) where
        D: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for document in documents {
            self.update_from_document(document);
        }
    }

    /// Tokenize `text` and count it as one document.
    ///
    /// Nothing is counted if the tokenizer fails.
    pub fn update_from_text<K: DocumentTokenizer>(
        &mut self,
        text: &str,
        tokenizer: &K,
    ) -> WFResult<()> {
        self.update_from_document(tokenizer.tokenize(text)?);
        Ok(())
    }

    /// Tokenize and count each sample as one document.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    /// * `tokenizer` - The tokenizer.
    ///
    /// ## Returns
    /// The first tokenizer error; samples before it stay counted.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples, tokenizer)))]
    pub fn update_from_samples<I, K>(
        &mut self,
        samples: I,
        tokenizer: &K,
    ) -> WFResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        K: DocumentTokenizer,
    {
        for sample in samples {
            self.update_from_text(sample.as_ref(), tokenizer)?;
        }
        Ok(())
    }

    /// Fold another builder's counts into this one.
    ///
    /// Tokens first seen by `other` rank after every token already
    /// seen by `self` when counts tie.
    pub fn merge(
        &mut self,
        other: VocabularyBuilder,
    ) {
        self.num_documents += other.num_documents;
        self.num_tokens += other.num_tokens;
        for (token, count) in other.entries {
            match self.index.get(token.as_str()) {
                Some(&idx) => self.entries[idx].1 += count,
                None => {
                    self.index.insert(token.clone(), self.entries.len());
                    self.entries.push((token, count));
                }
            }
        }
    }

    /// All ``(token, count)`` pairs in rank order.
    ///
    /// Descending count; ties keep first-seen order.
    pub fn ranked_counts(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        // sort_by is stable.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Freeze the top `max_size` tokens into a [`Vocabulary`].
    ///
    /// ## Returns
    /// The vocabulary; or [`WordframeError::InvalidConfiguration`] if
    /// `max_size` is 0, or [`WordframeError::VocabSizeOverflow`] if the
    /// vocabulary cannot be indexed by `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn build<T: TokenType>(&self) -> WFResult<Vocabulary<T>> {
        self.options.validate()?;

        let ranked = self.ranked_counts();
        let kept = ranked.len().min(self.options.max_size);

        let vocab = Vocabulary::from_ranked_tokens(ranked[..kept].iter().map(|&(token, _)| token))?;

        log::debug!(
            "vocabulary: kept {} of {} distinct tokens (max_size={}, documents={}, tokens={})",
            vocab.len(),
            self.num_distinct(),
            self.options.max_size,
            self.num_documents,
            self.num_tokens,
        );
        if let Some(&(token, count)) = ranked.get(kept) {
            log::trace!("first dropped token: {token:?} (count={count})");
        }

        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{RegexTokenizer, WordTokenizer};

    #[test]
    fn test_tie_break_by_first_seen() {
        let tokenizer = WordTokenizer::default();
        let mut builder = VocabularyOptions::new(2).init();
        builder.update_from_samples(["a b b", "b c"], &tokenizer).unwrap();

        let vocab: Vocabulary<u32> = builder.build().unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.lookup_id("b"), Some(1));
        assert_eq!(vocab.lookup_id("a"), Some(2));
        assert_eq!(vocab.lookup_id("c"), None);
    }

    #[test]
    fn test_tokenizer_error_counts_nothing() {
        let tokenizer = RegexTokenizer::new(r"(a|aa)+\1*c(?!x)|[a-z]+").unwrap();
        let mut builder = VocabularyOptions::new(10).init();

        let bad = format!("first {} second", "a".repeat(40));
        let result = builder.update_from_samples(["ok ok", bad.as_str(), "never"], &tokenizer);

        assert!(matches!(result, Err(WordframeError::Tokenize(_))));
        assert_eq!(builder.num_documents(), 1);
        assert_eq!(builder.count("ok"), 2);
        assert_eq!(builder.count("first"), 0);
        assert_eq!(builder.count("never"), 0);
    }

    #[test]
    fn test_ranked_counts() {
        let mut builder = VocabularyOptions::new(10).init();
        builder.update_from_documents([vec!["x", "y", "z"], vec!["z", "y"], vec!["z"]]);

        assert_eq!(builder.num_documents(), 3);
        assert_eq!(builder.num_tokens(), 6);
        assert_eq!(builder.num_distinct(), 3);
        assert_eq!(builder.count("z"), 3);
        assert_eq!(builder.count("q"), 0);

        assert_eq!(
            builder.ranked_counts(),
            vec![("z", 3), ("y", 2), ("x", 1)]
        );

        let vocab: Vocabulary<u16> = builder.build().unwrap();
        assert_eq!(vocab.tokens(), &["z", "y", "x"]);
    }

    #[test]
    fn test_fewer_tokens_than_max() {
        let mut builder = VocabularyOptions::new(100).init();
        builder.update_from_document(["one", "two"]);

        let vocab: Vocabulary<u32> = builder.build().unwrap();
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_empty_corpus() {
        let builder = VocabularyOptions::new(5).init();
        let vocab: Vocabulary<u32> = builder.build().unwrap();
        assert!(vocab.is_empty());

        let mut builder = VocabularyOptions::new(5).init();
        builder.update_from_document(Vec::<String>::new());
        let vocab: Vocabulary<u32> = builder.build().unwrap();
        assert!(vocab.is_empty());
        assert_eq!(builder.num_documents(), 1);
    }

    #[test]
    fn test_zero_max_size() {
        let options = VocabularyOptions::new(0);
        assert!(matches!(
            options.validate(),
            Err(WordframeError::InvalidConfiguration(_))
        ));

        let mut builder = options.init();
        builder.update_from_document(["a"]);
        assert!(matches!(
            builder.build::<u32>(),
            Err(WordframeError::InvalidConfiguration(_))
        ));

        let builder = VocabularyOptions::new(0).with_max_size(1).init();
        assert!(builder.build::<u32>().is_ok());
    }

    #[test]
    fn test_overflow() {
        let mut builder = VocabularyOptions::new(1000).init();
        builder.update_from_document((0..300).map(|i| format!("t{i}")));

        assert!(matches!(
            builder.build::<u8>(),
            Err(WordframeError::VocabSizeOverflow { size: 300 })
        ));

        builder.options = builder.options.with_max_size(255);
        let vocab = builder.build::<u8>().unwrap();
        assert_eq!(vocab.max_id(), Some(255));
    }

    #[test]
    fn test_merge() {
        let mut left = VocabularyOptions::new(10).init();
        left.update_from_document(["a", "b"]);

        let mut right = VocabularyOptions::new(10).init();
        right.update_from_document(["c", "b", "c"]);

        left.merge(right);

        assert_eq!(left.num_documents(), 2);
        assert_eq!(left.num_tokens(), 5);
        // b=2 and c=2 tie; b was seen first by the left builder.
        assert_eq!(
            left.ranked_counts(),
            vec![("b", 2), ("c", 2), ("a", 1)]
        );
    }
}
