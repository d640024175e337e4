//! # Encoded Batch

use crate::{
    errors::{WFResult, WordframeError},
    types::TokenType,
};

/// A row-major ``(rows x width)`` id matrix.
///
/// One row per document; every row has exactly `width` ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch<T: TokenType> {
    data: Vec<T>,
    width: usize,
}

impl<T: TokenType> EncodedBatch<T> {
    /// Create an empty batch.
    ///
    /// ## Returns
    /// [`WordframeError::InvalidConfiguration`] if `width` is 0.
    pub fn new(width: usize) -> WFResult<Self> {
        Self::with_capacity(width, 0)
    }

    /// Create an empty batch with room for `rows` rows.
    pub fn with_capacity(
        width: usize,
        rows: usize,
    ) -> WFResult<Self> {
        if width == 0 {
            return Err(WordframeError::InvalidConfiguration(
                "batch width must be > 0".to_string(),
            ));
        }
        Ok(Self {
            data: Vec::with_capacity(width * rows),
            width,
        })
    }

    /// Create a `rows x width` batch of reserved ids.
    pub(crate) fn zeros(
        width: usize,
        rows: usize,
    ) -> Self {
        debug_assert!(width > 0);
        Self {
            data: vec![T::zero(); width * rows],
            width,
        }
    }

    /// Build from a flat row-major buffer.
    ///
    /// ## Returns
    /// An error if `width` is 0, or `data.len()` is not a multiple of `width`.
    pub fn from_flat(
        data: Vec<T>,
        width: usize,
    ) -> WFResult<Self> {
        if width == 0 {
            return Err(WordframeError::InvalidConfiguration(
                "batch width must be > 0".to_string(),
            ));
        }
        if data.len() % width != 0 {
            return Err(WordframeError::InvalidConfiguration(format!(
                "flat length {} is not a multiple of width {width}",
                data.len()
            )));
        }
        Ok(Self { data, width })
    }

    /// Append a row.
    ///
    /// ## Returns
    /// [`WordframeError::InvalidConfiguration`] if the row length is not `width`.
    pub fn push_row(
        &mut self,
        row: &[T],
    ) -> WFResult<()> {
        if row.len() != self.width {
            return Err(WordframeError::InvalidConfiguration(format!(
                "row length {} != batch width {}",
                row.len(),
                self.width
            )));
        }
        self.data.extend_from_slice(row);
        Ok(())
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.data.len() / self.width
    }

    /// The row width; the sequence length `L`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// ``(rows, width)``.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.width)
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get row `idx`.
    ///
    /// ## Panics
    /// If `idx >= rows()`.
    pub fn row(
        &self,
        idx: usize,
    ) -> &[T] {
        &self.data[idx * self.width..(idx + 1) * self.width]
    }

    /// Get row `idx`, if present.
    pub fn get_row(
        &self,
        idx: usize,
    ) -> Option<&[T]> {
        if idx < self.rows() {
            Some(self.row(idx))
        } else {
            None
        }
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> core::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width)
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Release the flat row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Split into owned rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}
