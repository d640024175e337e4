mod commands;
mod input_output;
mod logging;
mod records;

use clap::Parser;
use commands::Commands;

/// wframe: build vocabularies and frame documents into fixed-length id rows.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
