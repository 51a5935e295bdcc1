// rulez-hyphenate: Hyphenate words from stdin or the command line.
//
// Reads whitespace-delimited words until the sentinel `===` (or end of
// input) and prints one hyphenated word per line.
//
// Usage:
//   rulez-hyphenate [OPTIONS] [WORD...]
//
// Options:
//   --separator SEP     Hyphen separator (default: -, env RULEZ_SEPARATOR)
//   --sentinel WORD     Word that stops processing (default: ===)
//   -f, --format FMT    text | pattern | json
//   -q, --quiet         Suppress log output
//   -v, --verbose       Increase log verbosity
//   -h, --help          Print help

use clap::Parser;
use rulez_cli::args::HyphenateArgs;

fn main() -> anyhow::Result<()> {
    HyphenateArgs::parse().execute()
}
