use std::{fs::File, io::BufReader};

use arrow::array::{Array, StringArray};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use wordframe::corpus::{DEFAULT_TEXT_FIELD, read_jsonl_records, read_text_lines};

/// Record file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FileFormat {
    /// Simple text files; one record per line.
    Text,

    /// JSON lines; one object per line.
    Jsonl,

    /// Parquet files.
    Parquet,
}

/// Record input arg group.
#[derive(clap::Args, Debug)]
pub struct RecordArgs {
    /// Input files.
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Input file format.
    #[arg(long, default_value = "text")]
    pub input_format: FileFormat,

    /// Text field (jsonl) or column (parquet).
    #[arg(long, default_value = DEFAULT_TEXT_FIELD)]
    pub field: String,
}

impl RecordArgs {
    /// Read every file, in order, passing each batch of texts to `f`.
    ///
    /// Text and jsonl files are one batch each; parquet files are
    /// one batch per record batch.
    pub fn for_each_batch<F>(
        &self,
        mut f: F,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        F: FnMut(Vec<String>) -> Result<(), Box<dyn std::error::Error>>,
    {
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            match self.input_format {
                FileFormat::Text => f(self.read_text_file(path)?)?,
                FileFormat::Jsonl => f(self.read_jsonl_file(path)?)?,
                FileFormat::Parquet => self.read_parquet_file(path, &mut f)?,
            }
        }
        Ok(())
    }

    fn read_text_file(
        &self,
        path: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let reader = BufReader::new(File::open(path)?);
        Ok(read_text_lines(reader).collect::<Result<_, _>>()?)
    }

    fn read_jsonl_file(
        &self,
        path: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let reader = BufReader::new(File::open(path)?);
        Ok(read_jsonl_records(reader, &self.field).collect::<Result<_, _>>()?)
    }

    fn read_parquet_file<F>(
        &self,
        path: &str,
        f: &mut F,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        F: FnMut(Vec<String>) -> Result<(), Box<dyn std::error::Error>>,
    {
        let file = File::open(path)?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
        for batch in reader {
            let batch = batch?;

            let column = batch
                .column_by_name(&self.field)
                .ok_or_else(|| format!("{path}: no {:?} column", self.field))?;
            let column = column
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| format!("{path}: column {:?} is not a string column", self.field))?;

            // Null cells become empty documents, keeping row alignment.
            let samples = column
                .iter()
                .map(|s| s.unwrap_or_default().to_string())
                .collect();

            f(samples)?;
        }

        Ok(())
    }
}
