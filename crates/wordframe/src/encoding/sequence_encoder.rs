//! # Sequence Encoder

use std::sync::Arc;

use crate::{
    encoding::{EncodedBatch, SequenceEncoderOptions, SequencePolicy},
    errors::WFResult,
    tokenize::DocumentTokenizer,
    types::TokenType,
    vocab::Vocabulary,
};

/// Frames documents into fixed-length id sequences.
///
/// Every output has exactly [`length`](Self::length) ids:
/// * long documents lose tokens from the policy's truncation side;
/// * short documents are filled with id `0` on the policy's padding side;
/// * tokens absent from the vocabulary become id `0` as well.
///
/// The encoder only reads its [`Vocabulary`]; it is `Send + Sync`,
/// and encodings of different documents are independent.
#[derive(Debug, Clone)]
pub struct SequenceEncoder<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,
    options: SequenceEncoderOptions,
}

impl<T: TokenType> SequenceEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Returns
    /// The encoder; or [`crate::WordframeError::InvalidConfiguration`] if the options are invalid.
    pub fn new(
        vocab: Arc<Vocabulary<T>>,
        options: SequenceEncoderOptions,
    ) -> WFResult<Self> {
        options.validate()?;
        Ok(Self { vocab, options })
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// The encoder options.
    pub fn options(&self) -> &SequenceEncoderOptions {
        &self.options
    }

    /// The output sequence length.
    pub fn length(&self) -> usize {
        self.options.length
    }

    /// The truncation/padding policy.
    pub fn policy(&self) -> SequencePolicy {
        self.options.policy
    }

    /// Encode a document into `out`.
    ///
    /// The frame width is `out.len()`, not the configured length.
    pub fn encode_into<S: AsRef<str>>(
        &self,
        document: &[S],
        out: &mut [T],
    ) {
        self.options
            .policy
            .frame_into(document, out, |token| self.vocab.id_or_unknown(token.as_ref()));
    }

    /// Encode a tokenized document.
    ///
    /// ## Returns
    /// Exactly [`length`](Self::length) ids.
    pub fn encode<S: AsRef<str>>(
        &self,
        document: &[S],
    ) -> Vec<T> {
        let mut out = vec![T::zero(); self.length()];
        self.encode_into(document, &mut out);
        out
    }

    /// Tokenize and encode raw text.
    ///
    /// ## Returns
    /// Exactly [`length`](Self::length) ids; or the tokenizer's error.
    pub fn encode_text<K: DocumentTokenizer>(
        &self,
        text: &str,
        tokenizer: &K,
    ) -> WFResult<Vec<T>> {
        Ok(self.encode(&tokenizer.tokenize(text)?))
    }

    /// Encode a batch of tokenized documents.
    ///
    /// ## Returns
    /// A ``(documents x length)`` batch; row `i` is document `i`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, documents)))]
    pub fn encode_batch<D, S>(
        &self,
        documents: &[D],
    ) -> EncodedBatch<T>
    where
        D: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        self.frame_rows(documents.len(), |idx, row| {
            self.encode_into(documents[idx].as_ref(), row)
        })
    }

    /// Tokenize and encode a batch of raw texts.
    ///
    /// Every text is tokenized before any row is framed; if any text fails,
    /// no batch is produced.
    ///
    /// ## Returns
    /// A ``(texts x length)`` batch; row `i` is text `i`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, texts, tokenizer)))]
    pub fn encode_texts<I, K>(
        &self,
        texts: I,
        tokenizer: &K,
    ) -> WFResult<EncodedBatch<T>>
    where
        I: IntoIterator,
        I::Item: AsRef<str> + Sync,
        K: DocumentTokenizer,
    {
        let texts: Vec<I::Item> = texts.into_iter().collect();

        #[cfg(feature = "rayon")]
        let documents: Vec<Vec<String>> = if self.options.parallel {
            use rayon::prelude::*;
            texts
                .par_iter()
                .map(|text| tokenizer.tokenize(text.as_ref()))
                .collect::<WFResult<_>>()?
        } else {
            tokenizer.tokenize_batch(&texts)?
        };
        #[cfg(not(feature = "rayon"))]
        let documents: Vec<Vec<String>> = tokenizer.tokenize_batch(&texts)?;

        Ok(self.encode_batch(&documents))
    }

    /// Fill a ``(rows x length)`` batch, one row per `frame(idx, row)` call.
    fn frame_rows<F>(
        &self,
        rows: usize,
        frame: F,
    ) -> EncodedBatch<T>
    where
        F: Fn(usize, &mut [T]) + Sync,
    {
        let width = self.length();
        let mut batch = EncodedBatch::zeros(width, rows);

        log::trace!(
            "encoding {rows} rows x {width} (parallel={})",
            self.options.parallel
        );

        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                if self.options.parallel {
                    use rayon::prelude::*;
                    batch
                        .as_mut_slice()
                        .par_chunks_mut(width)
                        .enumerate()
                        .for_each(|(idx, row)| frame(idx, row));
                    return batch;
                }
            }
        }

        batch
            .as_mut_slice()
            .chunks_mut(width)
            .enumerate()
            .for_each(|(idx, row)| frame(idx, row));
        batch
    }
}
