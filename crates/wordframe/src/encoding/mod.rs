//! # Sequence Encoding
//!
//! Frames token documents into fixed-length id sequences.
//!
//! * [`SequencePolicy`] - which [`Side`] is truncated, and which is padded.
//! * [`SequenceEncoderOptions`] - length `L`, policy, parallelism.
//! * [`SequenceEncoder`] - encodes documents against a frozen [`crate::Vocabulary`].
//! * [`EncodedBatch`] - the ``(documents x L)`` output matrix.
//!
//! [`fit_sequence`] applies the same framing to id sequences produced elsewhere.

mod encoded_batch;
mod encoder_options;
mod sequence_encoder;
mod sequence_policy;

#[doc(inline)]
pub use encoded_batch::EncodedBatch;
#[doc(inline)]
pub use encoder_options::SequenceEncoderOptions;
#[doc(inline)]
pub use sequence_encoder::SequenceEncoder;
#[doc(inline)]
pub use sequence_policy::{SequencePolicy, Side, fit_sequence};
