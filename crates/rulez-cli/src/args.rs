//! Command-line arguments for `rulez-hyphenate`

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rulez_en::HyphenatorOptions;

use crate::{DEFAULT_SENTINEL, OutputFormat, StreamOptions, process_words, run_stream};

/// Hyphenate words using the VCV and VCCV rules.
///
/// If WORD arguments are given, hyphenates each word. Otherwise reads
/// whitespace-delimited words from stdin until the sentinel word.
#[derive(Debug, Parser)]
#[command(name = "rulez-hyphenate", version)]
pub struct HyphenateArgs {
    /// Words to hyphenate (default: read stdin)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Text inserted at each hyphenation point
    #[arg(long, env = "RULEZ_SEPARATOR", default_value = "-")]
    pub separator: String,

    /// Word that stops processing
    #[arg(long, default_value = DEFAULT_SENTINEL)]
    pub sentinel: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl HyphenateArgs {
    /// Execute the hyphenate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {self:?}");

        let options = self.stream_options();
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());

        let summary = if self.words.is_empty() {
            let stdin = io::stdin();
            run_stream(stdin.lock(), &mut out, &options).context("failed to hyphenate stdin")?
        } else {
            let words = self.words.iter().cloned().map(Ok);
            process_words(words, &mut out, &options).context("failed to hyphenate arguments")?
        };
        out.flush().context("failed to flush stdout")?;

        log::info!("hyphenated {} words", summary.words);
        Ok(())
    }

    /// Build stream options from the parsed arguments.
    pub fn stream_options(&self) -> StreamOptions {
        StreamOptions {
            sentinel: self.sentinel.clone(),
            format: self.format,
            hyphenator: HyphenatorOptions {
                separator: self.separator.clone(),
            },
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }
    }
}
