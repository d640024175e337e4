//! # Regex Tokenizer
//!
//! Mixes `regex` and `fancy_regex`; patterns the basic engine rejects
//! (lookaround, backreferences) fall back to `fancy_regex`.

use core::fmt::Debug;

use crate::{
    errors::{WFResult, WordframeError},
    tokenize::DocumentTokenizer,
};

/// The default word pattern.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+";

/// Compiled regex, from either engine.
#[derive(Debug, Clone)]
enum CompiledPattern {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl CompiledPattern {
    fn compile(pattern: &str) -> WFResult<Self> {
        match regex::Regex::new(pattern) {
            Ok(re) => Ok(Self::Basic(re)),
            Err(basic_err) => {
                log::debug!("regex rejected {pattern:?} ({basic_err}); trying fancy_regex");
                fancy_regex::Regex::new(pattern)
                    .map(Self::Fancy)
                    .map_err(|e| WordframeError::Parse(format!("regex {pattern:?}: {e}")))
            }
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Basic(re) => re.as_str(),
            Self::Fancy(re) => re.as_str(),
        }
    }

    fn for_each_match<F: FnMut(&str)>(
        &self,
        text: &str,
        mut f: F,
    ) -> WFResult<()> {
        match self {
            Self::Basic(re) => re.find_iter(text).for_each(|m| f(m.as_str())),
            Self::Fancy(re) => {
                for m in re.find_iter(text) {
                    let m = m.map_err(|e| {
                        WordframeError::Tokenize(format!("regex {:?}: {e}", re.as_str()))
                    })?;
                    f(m.as_str());
                }
            }
        }
        Ok(())
    }
}

/// Regex-match tokenizer.
///
/// Every non-overlapping match of the pattern is one token.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: CompiledPattern,

    /// Lowercase the text before matching.
    pub lowercase: bool,
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self {
            pattern: CompiledPattern::Basic(
                regex::Regex::new(DEFAULT_WORD_PATTERN).expect("default pattern compiles"),
            ),
            lowercase: true,
        }
    }
}

impl RegexTokenizer {
    /// Compile a new tokenizer.
    ///
    /// ## Arguments
    /// * `pattern` - the token pattern; `regex` syntax, or `fancy_regex` syntax.
    ///
    /// ## Returns
    /// The tokenizer, or a [`WordframeError::Parse`] if neither engine accepts the pattern.
    pub fn new<S: AsRef<str>>(pattern: S) -> WFResult<Self> {
        Ok(Self {
            pattern: CompiledPattern::compile(pattern.as_ref())?,
            lowercase: true,
        })
    }

    /// Set whether text is lowercased.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Is the pattern running on the `fancy_regex` engine?
    pub fn is_fancy(&self) -> bool {
        matches!(self.pattern, CompiledPattern::Fancy(_))
    }
}

impl DocumentTokenizer for RegexTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> WFResult<Vec<String>> {
        let lowered;
        let text = if self.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        let mut tokens = Vec::new();
        self.pattern
            .for_each_match(text, |piece| tokens.push(piece.to_string()))?;
        Ok(tokens)
    }
}
