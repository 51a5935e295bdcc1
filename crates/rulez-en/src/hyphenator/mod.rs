// Hyphenation module -- vowel/consonant window automaton
//
// Two rules decide where a hyphen goes:
//
// 1. vowel-consonant-vowel: hyphenate before the consonant, unless the
//    second vowel is an "e" that ends the word.
// 2. vowel-consonant-consonant-vowel: hyphenate before the second consonant.
//
// Rule 1 is matched by state VCV and rule 2 by state VCCV. Both states fold
// into V: the vowel that completes a window also opens the next one, so
// overlapping windows such as V-C-V-C-V hyphenate at both positions.

use rulez_core::{ParsedWord, Symbol};

use crate::english::constants::SILENT_E;
use crate::tokenizer::parse_word;

// ---------------------------------------------------------------------------
// Automaton
// ---------------------------------------------------------------------------

/// How much of a rule window has been matched by the most recent symbols.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// No vowel context. Also the initial state.
    C,
    V,
    VC,
    /// Rule 1 window complete; also acts as V.
    VCV,
    VCC,
    /// Rule 2 window complete; also acts as V.
    VCCV,
}

impl State {
    /// State before the first symbol is read.
    pub const INITIAL: State = State::C;

    /// All states, in transition table row order.
    pub const ALL: [State; 6] = [
        State::C,
        State::V,
        State::VC,
        State::VCV,
        State::VCC,
        State::VCCV,
    ];

    fn row(self) -> usize {
        match self {
            State::C => 0,
            State::V => 1,
            State::VC => 2,
            State::VCV => 3,
            State::VCC => 4,
            State::VCCV => 5,
        }
    }
}

/// Transition table, indexed by state row and input column.
#[rustfmt::skip]
const TRANSITIONS: [[State; 3]; 6] = [
    //  Consonant     Vowel          Punctuation
    [State::C,   State::V,    State::C  ], // C
    [State::VC,  State::C,    State::V  ], // V
    [State::VCC, State::VCV,  State::VC ], // VC
    [State::VC,  State::V,    State::V  ], // VCV  (folded with V)
    [State::C,   State::VCCV, State::VCC], // VCC
    [State::VC,  State::V,    State::V  ], // VCCV (folded with V)
];

fn column(symbol: Symbol) -> Option<usize> {
    match symbol {
        Symbol::Consonant => Some(0),
        Symbol::Vowel => Some(1),
        Symbol::Punctuation => Some(2),
        Symbol::End => None,
    }
}

/// Look up the next state. Returns `None` for [`Symbol::End`], which ends
/// the scan.
pub fn transition(state: State, symbol: Symbol) -> Option<State> {
    Some(TRANSITIONS[state.row()][column(symbol)?])
}

/// Token indices that get a hyphen in front of them, in ascending order.
pub fn hyphen_points(word: &ParsedWord) -> Vec<usize> {
    let pattern = word.pattern();
    let mut points = Vec::new();
    let mut state = State::INITIAL;

    for (i, &symbol) in pattern.iter().enumerate() {
        let Some(next) = transition(state, symbol) else {
            break;
        };
        state = next;

        // Both windows are at least three symbols long, so i >= 2 here.
        match state {
            State::VCV if !is_silent_e(word, i) => points.push(i - 1),
            State::VCCV => points.push(i - 1),
            _ => {}
        }
    }

    points
}

/// True if token `i` is a lowercase "e" and the last token of the word.
fn is_silent_e(word: &ParsedWord, i: usize) -> bool {
    word.tokens()[i].lowercase == SILENT_E && word.pattern()[i + 1] == Symbol::End
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Hyphenate a parsed word with `-` as the marker.
pub fn hyphenate(word: &ParsedWord) -> String {
    insert_hyphens(word, "-")
}

/// Rebuild the word from its original-case tokens, putting `separator` in
/// front of every token chosen by [`hyphen_points`].
pub fn insert_hyphens(word: &ParsedWord, separator: &str) -> String {
    let mut points = hyphen_points(word).into_iter().peekable();
    let mut out = String::new();

    for (i, token) in word.tokens().iter().enumerate() {
        if points.next_if_eq(&i).is_some() {
            out.push_str(separator);
        }
        out.push_str(&token.original);
    }
    out
}

/// Per-character hyphenation pattern.
///
/// The result has one character per character of the word: `'-'` where a
/// hyphen goes before that character, `' '` everywhere else.
pub fn hyphenation_pattern(word: &ParsedWord) -> String {
    let mut points = hyphen_points(word).into_iter().peekable();
    let mut out = String::new();

    for (i, token) in word.tokens().iter().enumerate() {
        let marked = points.next_if_eq(&i).is_some();
        for k in 0..token.char_len() {
            out.push(if marked && k == 0 { '-' } else { ' ' });
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Hyphenator trait
// ---------------------------------------------------------------------------

/// Word-level hyphenation backend.
pub trait Hyphenator {
    /// Return the per-character pattern for `word`; see
    /// [`hyphenation_pattern`].
    fn hyphenate(&self, word: &str) -> String;

    /// Return `word` with separators inserted at every hyphenation point.
    fn insert_hyphens(&self, word: &str) -> String;
}

/// Configuration options for [`RuleHyphenator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenatorOptions {
    /// Text inserted at each hyphenation point.
    pub separator: String,
}

impl Default for HyphenatorOptions {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
        }
    }
}

/// Tokenizer and automaton combined behind the [`Hyphenator`] trait.
#[derive(Debug, Clone, Default)]
pub struct RuleHyphenator {
    options: HyphenatorOptions,
}

impl RuleHyphenator {
    pub fn new(options: HyphenatorOptions) -> Self {
        Self { options }
    }

    /// Update hyphenator options.
    pub fn set_options(&mut self, options: HyphenatorOptions) {
        self.options = options;
    }

    /// Return a reference to the current options.
    pub fn options(&self) -> &HyphenatorOptions {
        &self.options
    }

    /// Hyphenate an already tokenized word with the configured separator.
    pub fn render(&self, word: &ParsedWord) -> String {
        insert_hyphens(word, &self.options.separator)
    }
}

impl Hyphenator for RuleHyphenator {
    fn hyphenate(&self, word: &str) -> String {
        hyphenation_pattern(&parse_word(word))
    }

    fn insert_hyphens(&self, word: &str) -> String {
        self.render(&parse_word(word))
    }
}
