//! stderr logging for `wframe`.

use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Crates whose records reach stderr: the library, and this binary.
const LOG_MODULES: [&str; 2] = ["wordframe", "wframe"];

/// Logging arg group; `info` unless raised with `-v` or silenced with `-q`.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Raise the log level: -v debug, -vv trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level filter.
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install the stderr logger; call once per process.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level() {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };

        stderrlog::new()
            .modules(LOG_MODULES)
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct LogOnly {
        #[command(flatten)]
        logging: LogArgs,
    }

    fn level(args: &[&str]) -> LevelFilter {
        LogOnly::parse_from(std::iter::once("wframe").chain(args.iter().copied()))
            .logging
            .level()
    }

    #[test]
    fn test_levels() {
        assert_eq!(level(&[]), LevelFilter::Info);
        assert_eq!(level(&["-v"]), LevelFilter::Debug);
        assert_eq!(level(&["-vvv"]), LevelFilter::Trace);
        assert_eq!(level(&["--quiet"]), LevelFilter::Off);

        assert!(LogOnly::try_parse_from(["wframe", "-q", "-v"]).is_err());
    }
}
