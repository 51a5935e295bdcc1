//! Rule-based hyphenation of single words.
//!
//! Two stages, leaves first:
//!
//! 1. [`tokenizer::parse_word`] splits a word into letter-cluster tokens and
//!    a consonant/vowel/punctuation pattern.
//! 2. [`hyphenator::hyphenate`] runs a six-state automaton over that pattern
//!    and inserts hyphens at vowel-consonant-vowel and
//!    vowel-consonant-consonant-vowel windows.
//!
//! ```
//! use rulez_en::{hyphenator, tokenizer};
//!
//! let word = tokenizer::parse_word("Translation!");
//! assert_eq!(word.pattern_string(), "CVCCVCVVCP");
//! assert_eq!(hyphenator::hyphenate(&word), "Tran-sla-tion!");
//! ```

mod english;
pub mod hyphenator;
pub mod tokenizer;

pub use hyphenator::{Hyphenator, HyphenatorOptions, RuleHyphenator};
