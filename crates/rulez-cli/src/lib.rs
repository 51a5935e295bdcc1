// rulez-cli: word stream plumbing shared by the CLI tools.
//
// Input is a stream of whitespace-delimited words read until a sentinel
// word; output is one line per processed word, flushed as it is written.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use rulez_core::Token;
use rulez_en::hyphenator::hyphenation_pattern;
use rulez_en::tokenizer::parse_word;
use rulez_en::{HyphenatorOptions, RuleHyphenator};
use serde::Serialize;

pub mod args;
pub mod error;

pub use error::{CliError, CliResult};

/// Word that ends the input stream. It produces no output.
pub const DEFAULT_SENTINEL: &str = "===";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Lazily splits a reader into whitespace-delimited words.
///
/// Lines are read one at a time, only when the words of the previous line
/// are used up, so a consumer that stops early leaves the rest unread.
pub struct WordStream<R> {
    reader: R,
    pending: VecDeque<String>,
    exhausted: bool,
}

impl<R: BufRead> WordStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }
}

impl<R: BufRead> Iterator for WordStream<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(Ok(word));
            }
            if self.exhausted {
                return None;
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => self.exhausted = true,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// How each processed word is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The hyphenated word
    #[default]
    Text,
    /// The word followed by its per-character hyphenation pattern
    Pattern,
    /// One JSON object per word with tokens and symbol pattern
    Json,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    word: &'a str,
    hyphenated: String,
    pattern: String,
    tokens: &'a [Token],
}

/// Options for [`process_words`].
#[derive(Debug, Clone)]
pub struct StreamOptions {
    pub sentinel: String,
    pub format: OutputFormat,
    pub hyphenator: HyphenatorOptions,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            format: OutputFormat::default(),
            hyphenator: HyphenatorOptions::default(),
        }
    }
}

/// What happened while processing a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Number of words written.
    pub words: usize,
    /// True if processing stopped at the sentinel rather than end of input.
    pub sentinel_seen: bool,
}

/// Render one word as an output line (without the newline).
pub fn format_word(
    hyphenator: &RuleHyphenator,
    word: &str,
    format: OutputFormat,
) -> CliResult<String> {
    let parsed = parse_word(word);
    log::debug!(
        "{word:?}: {} tokens, pattern {}",
        parsed.len(),
        parsed.pattern_string()
    );

    let line = match format {
        OutputFormat::Text => hyphenator.render(&parsed),
        OutputFormat::Pattern => format!("{word} {}", hyphenation_pattern(&parsed)),
        OutputFormat::Json => serde_json::to_string(&JsonRecord {
            word,
            hyphenated: hyphenator.render(&parsed),
            pattern: parsed.pattern_string(),
            tokens: parsed.tokens(),
        })?,
    };
    Ok(line)
}

/// Hyphenate words until the sentinel or the end of `words`, writing one
/// flushed line per word.
pub fn process_words<I, W>(words: I, out: &mut W, options: &StreamOptions) -> CliResult<StreamSummary>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let hyphenator = RuleHyphenator::new(options.hyphenator.clone());
    let mut summary = StreamSummary::default();

    for word in words {
        let word = word?;
        if word == options.sentinel {
            log::info!("sentinel reached after {} words", summary.words);
            summary.sentinel_seen = true;
            return Ok(summary);
        }
        let line = format_word(&hyphenator, &word, options.format)?;
        writeln!(out, "{line}")?;
        out.flush()?;
        summary.words += 1;
    }

    log::info!("end of input after {} words", summary.words);
    Ok(summary)
}

/// Read words from `reader` and process them; see [`process_words`].
pub fn run_stream<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    options: &StreamOptions,
) -> CliResult<StreamSummary> {
    process_words(WordStream::new(reader), out, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, options: &StreamOptions) -> (String, StreamSummary) {
        let mut out = Vec::new();
        let summary = run_stream(Cursor::new(input), &mut out, options).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    fn words(input: &str) -> Vec<String> {
        WordStream::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    // -- WordStream --

    #[test]
    fn word_stream_splits_on_any_whitespace() {
        assert_eq!(
            words("aba  anta\n\tchat\r\n\nate"),
            ["aba", "anta", "chat", "ate"]
        );
    }

    #[test]
    fn word_stream_empty_input() {
        assert!(words("").is_empty());
        assert!(words(" \n \n").is_empty());
    }

    #[test]
    fn word_stream_reads_lazily() {
        let mut stream = WordStream::new(Cursor::new("one two\nthree\n"));
        assert_eq!(stream.next().unwrap().unwrap(), "one");
        assert_eq!(stream.reader.position(), 8);
        assert_eq!(stream.next().unwrap().unwrap(), "two");
        assert_eq!(stream.reader.position(), 8);
    }

    // -- process_words / run_stream --

    #[test]
    fn one_line_per_word_until_sentinel() {
        let (out, summary) = run("aba ate\nanta chat\n===\nbanana\n", &StreamOptions::default());
        assert_eq!(out, "a-ba\nate\nan-ta\nchat\n");
        assert_eq!(
            summary,
            StreamSummary {
                words: 4,
                sentinel_seen: true
            }
        );
    }

    #[test]
    fn sentinel_first_produces_nothing() {
        let (out, summary) = run("=== aba", &StreamOptions::default());
        assert!(out.is_empty());
        assert_eq!(summary.words, 0);
        assert!(summary.sentinel_seen);
    }

    #[test]
    fn end_of_stream_without_sentinel() {
        let (out, summary) = run("Translation!", &StreamOptions::default());
        assert_eq!(out, "Tran-sla-tion!\n");
        assert!(!summary.sentinel_seen);
    }

    #[test]
    fn sentinel_must_match_whole_word() {
        let (out, _) = run("==== aba", &StreamOptions::default());
        assert_eq!(out, "====\na-ba\n");
    }

    #[test]
    fn empty_word_gives_empty_line() {
        let mut out = Vec::new();
        let input = vec![Ok(String::new()), Ok("aba".to_string())];
        process_words(input, &mut out, &StreamOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\na-ba\n");
    }

    #[test]
    fn read_error_is_reported() {
        let mut out = Vec::new();
        let input = vec![
            Ok("aba".to_string()),
            Err(io::Error::other("disk gone")),
        ];
        let err = process_words(input, &mut out, &StreamOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(String::from_utf8(out).unwrap(), "a-ba\n");
    }

    #[test]
    fn custom_sentinel_and_separator() {
        let options = StreamOptions {
            sentinel: "STOP".to_string(),
            hyphenator: HyphenatorOptions {
                separator: "·".to_string(),
            },
            ..StreamOptions::default()
        };
        let (out, summary) = run("banana === STOP anta", &options);
        assert_eq!(out, "ba·na·na\n===\n");
        assert!(summary.sentinel_seen);
    }

    // -- Output formats --

    #[test]
    fn pattern_format() {
        let options = StreamOptions {
            format: OutputFormat::Pattern,
            ..StreamOptions::default()
        };
        let (out, _) = run("banana", &options);
        assert_eq!(out, "banana   - - \n");
    }

    #[test]
    fn json_format() {
        let options = StreamOptions {
            format: OutputFormat::Json,
            ..StreamOptions::default()
        };
        let (out, _) = run("chat", &options);
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["word"], "chat");
        assert_eq!(value["hyphenated"], "chat");
        assert_eq!(value["pattern"], "CVC");
        assert_eq!(value["tokens"][0]["original"], "ch");
        assert_eq!(value["tokens"][0]["lowercase"], "ch");
        assert_eq!(value["tokens"].as_array().unwrap().len(), 3);
    }
}
