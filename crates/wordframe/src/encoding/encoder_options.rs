//! Sequence Encoder Options
//!
//! Options for building a [`SequenceEncoder`].

use std::sync::Arc;

use crate::{
    encoding::{SequenceEncoder, SequencePolicy, Side},
    errors::{WFResult, WordframeError},
    types::TokenType,
    vocab::Vocabulary,
};

/// Options for configuring a [`SequenceEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceEncoderOptions {
    /// The output sequence length; `L`.
    pub length: usize,

    /// The truncation/padding policy.
    pub policy: SequencePolicy,

    /// Should batches be encoded in parallel?
    ///
    /// Ignored without the `rayon` feature.
    pub parallel: bool,
}

impl SequenceEncoderOptions {
    /// Create options for sequences of `length` ids, with the default policy.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            policy: SequencePolicy::default(),
            parallel: false,
        }
    }

    /// Check the options.
    ///
    /// ## Returns
    /// [`WordframeError::InvalidConfiguration`] if `length` is 0.
    pub fn validate(&self) -> WFResult<()> {
        if self.length == 0 {
            return Err(WordframeError::InvalidConfiguration(
                "sequence length must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the sequence length.
    pub fn set_length(
        &mut self,
        length: usize,
    ) {
        self.length = length;
    }

    /// Set the sequence length and return the options.
    pub fn with_length(
        mut self,
        length: usize,
    ) -> Self {
        self.set_length(length);
        self
    }

    /// Set the policy.
    pub fn set_policy(
        &mut self,
        policy: SequencePolicy,
    ) {
        self.policy = policy;
    }

    /// Set the policy and return the options.
    pub fn with_policy(
        mut self,
        policy: SequencePolicy,
    ) -> Self {
        self.set_policy(policy);
        self
    }

    /// Set the truncation side and return the options.
    pub fn with_truncation(
        mut self,
        truncation: Side,
    ) -> Self {
        self.policy.truncation = truncation;
        self
    }

    /// Set the padding side and return the options.
    pub fn with_padding(
        mut self,
        padding: Side,
    ) -> Self {
        self.policy.padding = padding;
        self
    }

    /// Gets the configured parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded batch encoding.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value and return the options.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`SequenceEncoder`] for the given vocab.
    ///
    /// ## Returns
    /// The encoder; or [`WordframeError::InvalidConfiguration`] if the options are invalid.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<Vocabulary<T>>,
    ) -> WFResult<SequenceEncoder<T>> {
        SequenceEncoder::new(vocab, *self)
    }
}
