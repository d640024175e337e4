//! # Error Types

/// Errors from wordframe operations.
#[derive(Debug, thiserror::Error)]
pub enum WordframeError {
    /// A size or length option is out of range.
    ///
    /// Raised before any work is done; no partial results are produced.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// A record lacked the requested text field.
    #[error("record {line}: missing string field {field:?}")]
    MissingField {
        /// The requested field name.
        field: String,

        /// The 1-based record line.
        line: usize,
    },

    /// A tokenizer pattern failed while matching (e.g. the backtrack limit).
    ///
    /// The text is rejected whole; no partial token sequence is returned.
    #[error("tokenize failed: {0}")]
    Tokenize(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, json, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for wordframe operations.
pub type WFResult<T> = core::result::Result<T, WordframeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            WordframeError::InvalidConfiguration("length must be > 0".to_string()).to_string(),
            "invalid configuration: length must be > 0"
        );
        assert_eq!(
            WordframeError::MissingField {
                field: "contents".to_string(),
                line: 3
            }
            .to_string(),
            "record 3: missing string field \"contents\""
        );
        assert_eq!(
            WordframeError::VocabSizeOverflow { size: 70_000 }.to_string(),
            "vocab size (70000) exceeds token type capacity"
        );
    }
}
