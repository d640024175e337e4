//! # Truncation / Padding Policy

use core::{fmt, str::FromStr};

use crate::{
    errors::{WFResult, WordframeError},
    types::TokenType,
};

/// An end of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// The start of the sequence; also called "pre".
    Head,

    /// The end of the sequence; also called "post".
    #[default]
    Tail,
}

impl fmt::Display for Side {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Side::Head => write!(f, "head"),
            Side::Tail => write!(f, "tail"),
        }
    }
}

impl FromStr for Side {
    type Err = WordframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "head" | "pre" => Ok(Side::Head),
            "tail" | "post" => Ok(Side::Tail),
            _ => Err(WordframeError::Parse(format!(
                "unknown side {s:?}; expected head|tail"
            ))),
        }
    }
}

/// Where a sequence is cut when too long, and filled when too short.
///
/// The default is tail truncation and tail padding:
/// keep the first `L` tokens, and append padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SequencePolicy {
    /// The side excess tokens are dropped from.
    pub truncation: Side,

    /// The side padding ids are added on.
    pub padding: Side,
}

impl SequencePolicy {
    /// Create a new policy.
    pub fn new(
        truncation: Side,
        padding: Side,
    ) -> Self {
        Self {
            truncation,
            padding,
        }
    }

    /// Set the truncation side.
    pub fn with_truncation(
        self,
        truncation: Side,
    ) -> Self {
        Self { truncation, ..self }
    }

    /// Set the padding side.
    pub fn with_padding(
        self,
        padding: Side,
    ) -> Self {
        Self { padding, ..self }
    }

    /// Frame `src` into `out`, mapping kept items through `f`.
    ///
    /// Every slot of `out` is written; slots not covered by a kept item are
    /// set to `T::zero()`. The frame width is `out.len()`.
    pub fn frame_into<X, T, F>(
        &self,
        src: &[X],
        out: &mut [T],
        f: F,
    ) where
        T: TokenType,
        F: Fn(&X) -> T,
    {
        let width = out.len();

        let kept = if src.len() > width {
            match self.truncation {
                Side::Tail => &src[..width],
                Side::Head => &src[src.len() - width..],
            }
        } else {
            src
        };

        let offset = match self.padding {
            Side::Tail => 0,
            Side::Head => width - kept.len(),
        };

        out.fill(T::zero());
        for (slot, item) in out[offset..].iter_mut().zip(kept) {
            *slot = f(item);
        }
    }
}

/// Truncate or pad an id sequence to exactly `length`.
///
/// ## Arguments
/// * `ids` - the id sequence.
/// * `length` - the output length.
/// * `policy` - the truncation/padding policy.
///
/// ## Returns
/// A new vector of exactly `length` ids;
/// or [`WordframeError::InvalidConfiguration`] if `length` is 0.
pub fn fit_sequence<T: TokenType>(
    ids: &[T],
    length: usize,
    policy: SequencePolicy,
) -> WFResult<Vec<T>> {
    if length == 0 {
        return Err(WordframeError::InvalidConfiguration(
            "sequence length must be > 0".to_string(),
        ));
    }
    let mut out = vec![T::zero(); length];
    policy.frame_into(ids, &mut out, |&id| id);
    Ok(out)
}
