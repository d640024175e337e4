use std::io::Write;

use wordframe::{Vocabulary, VocabularyOptions, vocab::io::write_vocabulary};

use crate::{
    commands::TokenizerArgs,
    input_output::OutputArgs,
    logging::LogArgs,
    records::RecordArgs,
};

/// Args for the build-vocab command.
#[derive(clap::Args, Debug)]
pub struct BuildVocabArgs {
    #[command(flatten)]
    pub records: RecordArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,

    /// Max vocab size; K.
    #[arg(long)]
    pub max_size: usize,

    /// Log the N most frequent tokens.
    #[arg(long, default_value = "0")]
    pub report: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl BuildVocabArgs {
    /// Count the records and write the vocabulary.
    ///
    /// Options are checked before any input is read.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let options = VocabularyOptions::new(self.max_size);
        options.validate()?;

        let tokenizer = self.tokenizer.build()?;
        let mut builder = options.init();

        log::info!("Reading records:");
        self.records.for_each_batch(|batch| {
            builder.update_from_samples(&batch, &tokenizer)?;
            Ok(())
        })?;

        log::info!(
            "Counted {} tokens ({} distinct) over {} documents",
            builder.num_tokens(),
            builder.num_distinct(),
            builder.num_documents()
        );
        for (rank, (token, count)) in builder.ranked_counts().iter().take(self.report).enumerate() {
            log::info!("{:>6} {count:>10} {token:?}", rank + 1);
        }

        let vocab: Vocabulary<u32> = builder.build()?;
        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_vocabulary(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
