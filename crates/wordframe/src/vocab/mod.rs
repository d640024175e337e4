//! # Vocabulary
//!
//! This module provides the frozen [`Vocabulary`], the
//! [`VocabularyBuilder`] which produces it, and vocabulary io.
//!
//! A vocabulary is built once, over training documents only; it is then
//! frozen and shared read-only by every encoder (train, validation, test
//! and inference). Holding a [`Vocabulary`] rather than a
//! [`VocabularyBuilder`] is what makes a vocabulary usable for encoding.
//!
//! ## Ranking
//!
//! Tokens are ranked by descending frequency; equal frequencies keep
//! first-encountered order. The token at rank `i` gets id `i + 1`; id `0`
//! is reserved for padding and for unknown tokens.

pub mod io;

mod vocab_builder;
mod vocabulary;

#[doc(inline)]
pub use vocab_builder::{VocabularyBuilder, VocabularyOptions};
#[doc(inline)]
pub use vocabulary::{PAD_ID, UNKNOWN_ID, Vocabulary};
