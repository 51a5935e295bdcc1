//! Shared types for rule-based hyphenation.
//!
//! The tokenizer in `rulez-en` turns a word into a [`token::ParsedWord`]:
//! letter-cluster tokens paired with a [`enums::Symbol`] pattern. The
//! hyphenator then scans that pattern. This crate holds the data model and
//! the fixed alphabets both stages agree on.

pub mod character;
pub mod enums;
pub mod token;

pub use enums::Symbol;
pub use token::{ParsedWord, Token};
