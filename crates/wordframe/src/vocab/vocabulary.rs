//! # Frozen Vocabulary ``{ String <-> T }``

use core::fmt::Debug;

use crate::{
    errors::{WFResult, WordframeError},
    types::{TokenType, WFHashMap, hash_map_with_capacity},
};

/// The id used for padding slots, as a `usize` index.
///
/// Encoded sequences carry it as `T`; see [`Vocabulary::pad_id`].
pub const PAD_ID: usize = 0;

/// The id used for tokens absent from the vocabulary, as a `usize` index.
///
/// This is the same id as [`PAD_ID`]; an encoded sequence cannot distinguish
/// an unknown token from a padding slot. Encoded sequences carry it as `T`;
/// see [`Vocabulary::unknown_id`].
pub const UNKNOWN_ID: usize = PAD_ID;

/// A frozen, ranked token vocabulary.
///
/// The token at rank `i` (0-based) has id `i + 1`; id `0` is reserved
/// (see [`PAD_ID`], [`UNKNOWN_ID`]) and never assigned to a token.
///
/// A `Vocabulary` has no mutators; share it between encoders with `Arc`.
#[derive(Clone)]
pub struct Vocabulary<T: TokenType> {
    /// Tokens in rank order; `tokens[id - 1]`.
    tokens: Vec<String>,

    /// Map of ``{ token -> id }``.
    token_map: WFHashMap<String, T>,
}

impl<T: TokenType> Debug for Vocabulary<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Vocabulary")
            .field("len", &self.len())
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl<T: TokenType> PartialEq for Vocabulary<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.tokens == other.tokens
    }
}

impl<T: TokenType> Eq for Vocabulary<T> {}

impl<T: TokenType> Default for Vocabulary<T> {
    fn default() -> Self {
        Self {
            tokens: Vec::new(),
            token_map: hash_map_with_capacity(0),
        }
    }
}

impl<T: TokenType> Vocabulary<T> {
    /// Build a vocabulary from tokens in rank order.
    ///
    /// The first token gets id `1`.
    ///
    /// ## Arguments
    /// * `tokens` - the ranked tokens.
    ///
    /// ## Returns
    /// The vocabulary; or [`WordframeError::VocabConflict`] on a duplicate token,
    /// or [`WordframeError::VocabSizeOverflow`] if the largest id does not fit in `T`.
    pub fn from_ranked_tokens<I, S>(tokens: I) -> WFResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

        // ids run 1..=len.
        if T::from_usize(tokens.len()).is_none() {
            return Err(WordframeError::VocabSizeOverflow { size: tokens.len() });
        }

        let mut token_map: WFHashMap<String, T> = hash_map_with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            let id = T::from_usize(idx + 1).ok_or(WordframeError::TokenOutOfRange)?;
            if let Some(prev) = token_map.insert(token.clone(), id) {
                return Err(WordframeError::VocabConflict(format!(
                    "duplicate token {token:?} at ids {prev} and {id}"
                )));
            }
        }

        Ok(Self { tokens, token_map })
    }

    /// The number of tokens in the vocabulary.
    ///
    /// The reserved id is not counted.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The largest assigned id; `None` for an empty vocabulary.
    pub fn max_id(&self) -> Option<T> {
        T::from_usize(self.len()).filter(|id| !id.is_zero())
    }

    /// The reserved padding id.
    pub fn pad_id(&self) -> T {
        T::zero()
    }

    /// The reserved unknown-token id; equal to [`pad_id`](Self::pad_id).
    pub fn unknown_id(&self) -> T {
        T::zero()
    }

    /// Tokens in rank order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Does the vocabulary contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_map.contains_key(token)
    }

    /// Return the id for `token`, if any.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_map.get(token).copied()
    }

    /// Return the id for `token`; or the reserved id when absent.
    pub fn id_or_unknown(
        &self,
        token: &str,
    ) -> T {
        self.lookup_id(token).unwrap_or_else(T::zero)
    }

    /// Return the token for `id`, if any.
    ///
    /// The reserved id has no token.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> Option<&str> {
        let idx = id.to_usize()?.checked_sub(1)?;
        self.tokens.get(idx).map(String::as_str)
    }

    /// Iterate over ``(id, token)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.tokens.iter().enumerate().filter_map(|(idx, token)| {
            T::from_usize(idx + 1).map(|id| (id, token.as_str()))
        })
    }

    /// Map every token of a document to its id, without framing.
    ///
    /// Unknown tokens map to the reserved id.
    pub fn lookup_ids<I, S>(
        &self,
        document: I,
    ) -> Vec<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        document
            .into_iter()
            .map(|token| self.id_or_unknown(token.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ranked_tokens() {
        let vocab: Vocabulary<u32> = Vocabulary::from_ranked_tokens(["b", "a", "c"]).unwrap();

        assert_eq!(vocab.len(), 3);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.max_id(), Some(3));

        assert_eq!(vocab.lookup_id("b"), Some(1));
        assert_eq!(vocab.lookup_id("a"), Some(2));
        assert_eq!(vocab.lookup_id("c"), Some(3));
        assert_eq!(vocab.lookup_id("z"), None);
        assert!(vocab.contains("a"));
        assert!(!vocab.contains("z"));

        assert_eq!(vocab.lookup_token(0), None);
        assert_eq!(vocab.lookup_token(1), Some("b"));
        assert_eq!(vocab.lookup_token(3), Some("c"));
        assert_eq!(vocab.lookup_token(4), None);

        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![(1, "b"), (2, "a"), (3, "c")]
        );
    }

    #[test]
    fn test_reserved_ids() {
        let vocab: Vocabulary<u16> = Vocabulary::from_ranked_tokens(["x"]).unwrap();

        assert_eq!(vocab.pad_id(), 0);
        assert_eq!(vocab.unknown_id(), 0);
        assert_eq!(PAD_ID, UNKNOWN_ID);
        assert_eq!(usize::from(vocab.pad_id()), PAD_ID);
        assert_eq!(usize::from(vocab.unknown_id()), UNKNOWN_ID);

        assert_eq!(vocab.id_or_unknown("x"), 1);
        assert_eq!(vocab.id_or_unknown("y"), 0);
        assert_eq!(vocab.lookup_ids(["y", "x", "x"]), vec![0, 1, 1]);
    }

    #[test]
    fn test_empty() {
        let vocab: Vocabulary<u32> = Vocabulary::default();
        assert!(vocab.is_empty());
        assert_eq!(vocab.max_id(), None);
        assert_eq!(vocab.lookup_ids(["a"]), vec![0]);
        assert_eq!(vocab, Vocabulary::from_ranked_tokens(Vec::<String>::new()).unwrap());
    }

    #[test]
    fn test_duplicate_token() {
        let err = Vocabulary::<u32>::from_ranked_tokens(["a", "b", "a"]).unwrap_err();
        assert!(matches!(err, WordframeError::VocabConflict(_)));
    }

    #[test]
    fn test_overflow() {
        let tokens: Vec<String> = (0..256).map(|i| format!("t{i}")).collect();

        let err = Vocabulary::<u8>::from_ranked_tokens(tokens.clone()).unwrap_err();
        assert!(matches!(err, WordframeError::VocabSizeOverflow { size: 256 }));

        let vocab = Vocabulary::<u8>::from_ranked_tokens(tokens[..255].to_vec()).unwrap();
        assert_eq!(vocab.max_id(), Some(255));
    }
}
