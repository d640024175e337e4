//! # `wordframe` Sequence Framing
//!
//! `wordframe` turns a text corpus into the fixed-width integer matrix
//! a recurrent text classifier expects.
//!
//! There are two steps:
//! * [`vocab`] - count tokens over a training corpus and freeze the
//!   top-K into a [`Vocabulary`].
//! * [`encoding`] - frame each document into exactly `L` ids with a
//!   [`SequenceEncoder`], truncating and padding per a [`SequencePolicy`].
//!
//! Supporting pieces:
//! * [`tokenize`] - the [`DocumentTokenizer`] seam, with word and regex tokenizers.
//! * [`corpus`] - raw-text record readers (plain lines and JSON lines).
//! * [`vocab::io`] - vocabulary save/load.
//!
//! ## Reserved Id
//!
//! Id `0` is reserved. It marks padding slots, and it is also the id of
//! every token which is not in the vocabulary. The two are indistinguishable
//! in the output; see [`vocab::UNKNOWN_ID`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordframe::{
//!     SequenceEncoderOptions,
//!     SequencePolicy,
//!     Side,
//!     Vocabulary,
//!     VocabularyOptions,
//!     WordTokenizer,
//! };
//!
//! let tokenizer = WordTokenizer::default();
//!
//! let mut builder = VocabularyOptions::new(1000).init();
//! builder
//!     .update_from_samples(["The court ruled.", "The jury agreed."], &tokenizer)
//!     .unwrap();
//! let vocab: Arc<Vocabulary<u32>> = Arc::new(builder.build().unwrap());
//!
//! let encoder = SequenceEncoderOptions::new(4)
//!     .with_policy(SequencePolicy::new(Side::Tail, Side::Tail))
//!     .build(vocab)
//!     .unwrap();
//!
//! let batch = encoder
//!     .encode_texts(["the court agreed", "the"], &tokenizer)
//!     .unwrap();
//! assert_eq!(batch.shape(), (2, 4));
//! assert_eq!(batch.row(0), &[1, 2, 5, 0]);
//! assert_eq!(batch.row(1), &[1, 0, 0, 0]);
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod encoding;
pub mod errors;
pub mod tokenize;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoding::{
    EncodedBatch,
    SequenceEncoder,
    SequenceEncoderOptions,
    SequencePolicy,
    Side,
    fit_sequence,
};
#[doc(inline)]
pub use errors::{WFResult, WordframeError};
#[doc(inline)]
pub use tokenize::{DocumentTokenizer, RegexTokenizer, WordTokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{Vocabulary, VocabularyBuilder, VocabularyOptions};
