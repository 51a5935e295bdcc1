// Token and ParsedWord: the tokenizer's output and the hyphenator's input.

use crate::character::simple_lower;
use crate::enums::Symbol;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A non-empty contiguous slice of a word: one letter, one recognized
/// cluster, or one punctuation character.
///
/// Both forms always have the same number of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The characters as they appeared in the input, case preserved.
    pub original: String,

    /// The same characters lowercased.
    pub lowercase: String,
}

impl Token {
    /// Create a token from its original text, deriving the lowercase form.
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let lowercase = original.chars().map(simple_lower).collect();
        Self {
            original,
            lowercase,
        }
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.original.chars().count()
    }
}

// ---------------------------------------------------------------------------
// ParsedWord
// ---------------------------------------------------------------------------

/// A word split into tokens, with a parallel pattern of symbols.
///
/// Invariants:
/// - `pattern().len() == tokens().len() + 1` and the last symbol is
///   [`Symbol::End`], which appears nowhere else.
/// - `tokens()[i]` classifies as `pattern()[i]`.
/// - Concatenating every token's `original` reproduces the input word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedWord {
    tokens: Vec<Token>,
    pattern: Vec<Symbol>,
}

impl ParsedWord {
    /// Build a parsed word from classified tokens, appending the End symbol.
    ///
    /// # Panics
    ///
    /// Panics if a token is empty or is classified as [`Symbol::End`].
    pub fn from_classified(classified: Vec<(Token, Symbol)>) -> Self {
        let mut tokens = Vec::with_capacity(classified.len());
        let mut pattern = Vec::with_capacity(classified.len() + 1);
        for (token, symbol) in classified {
            assert!(!token.original.is_empty(), "tokens must be non-empty");
            assert_ne!(symbol, Symbol::End, "End has no token");
            tokens.push(token);
            pattern.push(symbol);
        }
        pattern.push(Symbol::End);
        Self { tokens, pattern }
    }

    /// The tokens, in word order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The full pattern, terminated by [`Symbol::End`].
    pub fn pattern(&self) -> &[Symbol] {
        &self.pattern
    }

    /// The pattern without the trailing End.
    pub fn symbols(&self) -> &[Symbol] {
        &self.pattern[..self.tokens.len()]
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the word had no characters.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The real symbols in single-letter notation, e.g. `"CVC"` for "chat".
    pub fn pattern_string(&self) -> String {
        self.symbols().iter().map(|s| s.as_char()).collect()
    }

    /// The input word, rebuilt from the tokens' original text.
    pub fn original_text(&self) -> String {
        self.tokens.iter().map(|t| t.original.as_str()).collect()
    }
}
