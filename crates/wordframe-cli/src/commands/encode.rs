use std::{io::Write, sync::Arc};

use wordframe::{
    EncodedBatch,
    SequenceEncoderOptions,
    SequencePolicy,
    Side,
    Vocabulary,
    vocab::io::load_vocabulary_path,
};

use crate::{
    commands::TokenizerArgs,
    input_output::OutputArgs,
    logging::LogArgs,
    records::RecordArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub records: RecordArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,

    /// Vocabulary file, as written by build-vocab.
    #[arg(long)]
    pub vocab: String,

    /// Output sequence length; L.
    #[arg(long)]
    pub length: usize,

    /// Side to drop excess tokens from: head|tail.
    #[arg(long, default_value = "tail")]
    pub truncate: Side,

    /// Side to add padding on: head|tail.
    #[arg(long, default_value = "tail")]
    pub pad: Side,

    /// Encode each batch in parallel.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub parallel: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl EncodeArgs {
    pub fn options(&self) -> SequenceEncoderOptions {
        SequenceEncoderOptions::new(self.length)
            .with_policy(SequencePolicy::new(self.truncate, self.pad))
            .with_parallel(self.parallel)
    }

    /// Load the vocabulary and write one row of ids per record.
    ///
    /// Options are checked before the vocabulary or any input is read.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let options = self.options();
        options.validate()?;

        log::info!("vocab: {}", self.vocab);
        let vocab: Arc<Vocabulary<u32>> = Arc::new(load_vocabulary_path(&self.vocab)?);
        log::info!("Vocabulary Size: {}", vocab.len());

        let encoder = options.build(vocab)?;
        let tokenizer = self.tokenizer.build()?;

        let mut writer = self.output.open_writer()?;
        let mut rows = 0;

        log::info!("Reading records:");
        self.records.for_each_batch(|batch| {
            let encoded = encoder.encode_texts(&batch, &tokenizer)?;
            rows += encoded.rows();
            write_rows(&encoded, &mut writer)
        })?;
        writer.flush()?;

        log::info!("Encoded {rows} rows x {}", encoder.length());

        Ok(())
    }
}

/// Write one line per row; ids separated by single spaces.
fn write_rows<W: Write + ?Sized>(
    batch: &EncodedBatch<u32>,
    writer: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    for row in batch.iter_rows() {
        let line = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::{Args, commands::Commands};

    #[test]
    fn test_args() {
        let args = Args::parse_from([
            "wframe",
            "encode",
            "a.jsonl",
            "b.jsonl",
            "--input-format",
            "jsonl",
            "--vocab",
            "v.b64",
            "--length",
            "300",
            "--truncate",
            "head",
            "--parallel",
        ]);
        let Commands::Encode(encode) = args.command else {
            panic!("expected encode");
        };

        assert_eq!(encode.records.files, vec!["a.jsonl", "b.jsonl"]);
        assert_eq!(
            encode.options(),
            SequenceEncoderOptions::new(300)
                .with_truncation(Side::Head)
                .with_padding(Side::Tail)
                .with_parallel(true)
        );
    }

    #[test]
    fn test_write_rows() {
        let batch = EncodedBatch::from_flat(vec![3, 1, 0, 0, 0, 0], 3).unwrap();
        let mut buf: Vec<u8> = Vec::new();
        write_rows(&batch, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3 1 0\n0 0 0\n");
    }
}
