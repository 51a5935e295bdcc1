// Shared enums: Symbol

/// Classification of one token in a word's pattern.
///
/// `End` is a sentinel: it appears exactly once, as the last element of a
/// [`ParsedWord`](crate::token::ParsedWord) pattern, and has no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Symbol {
    /// A consonant letter or a recognized consonant cluster.
    Consonant,
    /// A vowel letter.
    Vowel,
    /// Any character that is not a letter of either alphabet.
    Punctuation,
    /// End of the pattern.
    End,
}

impl Symbol {
    /// Single-letter notation used in diagnostics (`CVCCVCVVCP`).
    pub fn as_char(self) -> char {
        match self {
            Symbol::Consonant => 'C',
            Symbol::Vowel => 'V',
            Symbol::Punctuation => 'P',
            Symbol::End => '$',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_notation() {
        assert_eq!(Symbol::Consonant.as_char(), 'C');
        assert_eq!(Symbol::Vowel.as_char(), 'V');
        assert_eq!(Symbol::Punctuation.as_char(), 'P');
        assert_eq!(Symbol::End.as_char(), '$');
    }

    #[test]
    fn symbol_display_matches_notation() {
        assert_eq!(Symbol::Vowel.to_string(), "V");
    }

    #[test]
    fn symbol_is_copy() {
        let a = Symbol::Consonant;
        let b = a; // Copy
        assert_eq!(a, b);
    }
}
