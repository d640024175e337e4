use std::sync::Arc;

use wordframe::{DocumentTokenizer, RegexTokenizer, WordTokenizer, tokenize::DEFAULT_FILTERS};

use crate::logging::LogArgs;

mod build_vocab;
mod encode;

/// Subcommands for wframe
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Count tokens over a training corpus and save the top-K vocabulary.
    BuildVocab(build_vocab::BuildVocabArgs),

    /// Frame documents into fixed-length id rows.
    Encode(encode::EncodeArgs),
}

impl Commands {
    fn logging(&self) -> &LogArgs {
        match self {
            Commands::BuildVocab(cmd) => &cmd.logging,
            Commands::Encode(cmd) => &cmd.logging,
        }
    }

    /// Install the logger, then run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging().setup_logging()?;

        match self {
            Commands::BuildVocab(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
        }
    }
}

/// Tokenizer selection arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Token regex; when unset, the word tokenizer is used.
    #[arg(long, default_value = None)]
    pub regex: Option<String>,

    /// Keep the original case.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub keep_case: bool,

    /// Characters treated as separators by the word tokenizer.
    #[arg(long, default_value = DEFAULT_FILTERS)]
    pub filters: String,
}

impl TokenizerArgs {
    /// Build the selected tokenizer.
    pub fn build(&self) -> Result<Arc<dyn DocumentTokenizer>, Box<dyn std::error::Error>> {
        let lowercase = !self.keep_case;
        let tokenizer: Arc<dyn DocumentTokenizer> = match &self.regex {
            Some(pattern) => {
                log::info!("tokenizer: regex {pattern:?}");
                Arc::new(RegexTokenizer::new(pattern)?.with_lowercase(lowercase))
            }
            None => {
                log::info!("tokenizer: words");
                Arc::new(
                    WordTokenizer::default()
                        .with_lowercase(lowercase)
                        .with_filters(self.filters.clone()),
                )
            }
        };
        Ok(tokenizer)
    }
}
