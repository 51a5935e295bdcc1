// Word tokenizer: splits a word into letter-cluster tokens and a symbol pattern.
//
// Each token's length is decided before it is emitted by looking ahead at
// most two characters: a three-letter cluster is tried first, then a
// two-letter cluster, then a single character.

use rulez_core::character::{classify, simple_lower};
use rulez_core::{ParsedWord, Symbol, Token};

use crate::english::constants::{CLUSTERS, Cluster};

/// Split `word` into tokens and classify each one.
///
/// Recognized clusters become single [`Symbol::Consonant`] tokens, every
/// other character becomes its own token. An empty word yields no tokens
/// and a pattern of only [`Symbol::End`].
///
/// ```
/// use rulez_core::Symbol;
///
/// let word = rulez_en::tokenizer::parse_word("chat");
/// let texts: Vec<&str> = word.tokens().iter().map(|t| t.original.as_str()).collect();
/// assert_eq!(texts, ["ch", "a", "t"]);
/// assert_eq!(word.pattern()[0], Symbol::Consonant);
/// ```
pub fn parse_word(word: &str) -> ParsedWord {
    let chars: Vec<char> = word.chars().collect();
    let mut classified = Vec::with_capacity(chars.len());

    let mut pos = 0;
    while pos < chars.len() {
        let rest = &chars[pos..];
        let (len, symbol) = match find_cluster(rest) {
            Some(len) => (len, Symbol::Consonant),
            None => (1, classify(rest[0])),
        };
        let text: String = rest[..len].iter().collect();
        classified.push((Token::new(text), symbol));
        pos += len;
    }

    ParsedWord::from_classified(classified)
}

/// Return the length of the longest cluster at the start of `text`, if any.
fn find_cluster(text: &[char]) -> Option<usize> {
    let (&first, &second) = (text.first()?, text.get(1)?);
    let cluster = CLUSTERS.iter().find(|c| c.first == simple_lower(first) && c.second == second)?;
    if extends(cluster, text.get(2).copied()) {
        Some(3)
    } else {
        Some(2)
    }
}

fn extends(cluster: &Cluster, third: Option<char>) -> bool {
    matches!((cluster.extension, third), (Some(ext), Some(c)) if ext == c)
}
