// Character classification against the fixed hyphenation alphabets.
//
// Only ASCII letters are letters. Everything else, including non-ASCII
// letters, classifies as punctuation.

use crate::enums::Symbol;

/// Consonants (lowercase). `y` is deliberately absent.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z',
];

/// Vowels (lowercase). `y` is always a vowel.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Lowercase a character without changing the character count of a token.
///
/// Non-ASCII characters are returned unchanged, so a token's lowercase form
/// always has exactly as many characters as its original form.
pub fn simple_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Check whether a character is a consonant (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&simple_lower(c))
}

/// Check whether a character is a vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&simple_lower(c))
}

/// Classify a single character.
///
/// Total: any character that is neither a consonant nor a vowel is
/// punctuation. Never returns [`Symbol::End`].
pub fn classify(c: char) -> Symbol {
    if is_consonant(c) {
        Symbol::Consonant
    } else if is_vowel(c) {
        Symbol::Vowel
    } else {
        Symbol::Punctuation
    }
}
