// Orthographic constants shared by the tokenizer and the hyphenator.

/// A consonant cluster that is tokenized as a single consonant.
///
/// `first` is compared case-insensitively. `second` and `extension` must
/// match the input exactly, so they only match lowercase input letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cluster {
    pub first: char,
    pub second: char,
    /// Third letter that extends this cluster into a longer one.
    pub extension: Option<char>,
}

impl Cluster {
    const fn pair(first: char, second: char) -> Self {
        Self {
            first,
            second,
            extension: None,
        }
    }

    const fn extended(first: char, second: char, extension: char) -> Self {
        Self {
            first,
            second,
            extension: Some(extension),
        }
    }
}

/// Recognized clusters: sl, st, str, qu, tr, ph, bl, br, ch, cr.
///
/// At most one entry matches any two-letter prefix.
pub(crate) const CLUSTERS: &[Cluster] = &[
    Cluster::pair('s', 'l'),
    Cluster::extended('s', 't', 'r'),
    Cluster::pair('q', 'u'),
    Cluster::pair('t', 'r'),
    Cluster::pair('p', 'h'),
    Cluster::pair('b', 'l'),
    Cluster::pair('b', 'r'),
    Cluster::pair('c', 'h'),
    Cluster::pair('c', 'r'),
];

/// Lowercase text of the vowel that is not split off at the end of a word.
pub(crate) const SILENT_E: &str = "e";
