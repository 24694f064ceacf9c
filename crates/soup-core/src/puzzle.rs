use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder character marking a hidden letter in a masked word.
pub const MASK_SYMBOL: char = '0';

/// Decoded words keyed by the masked word they answer.
///
/// One map per resolution attempt; every puzzle handed to the solver appears
/// exactly once.
pub type Assignment = BTreeMap<String, String>;

/// A partially revealed word.
///
/// The masked string doubles as the puzzle identifier throughout the engine:
/// candidate reports, ledgers and assignments all key on it. Positions holding
/// the mask symbol are the positions the solver must fill; every other
/// position is fixed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Puzzle {
    masked: String,
    mask_indices: Vec<usize>,
}

impl Puzzle {
    /// Parses a masked word using the default [`MASK_SYMBOL`].
    pub fn parse(masked: &str) -> Self {
        Self::with_mask_symbol(masked, MASK_SYMBOL)
    }

    /// Parses a masked word whose hidden positions are marked with `symbol`.
    pub fn with_mask_symbol(masked: &str, symbol: char) -> Self {
        let mask_indices = masked
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == symbol)
            .map(|(idx, _)| idx)
            .collect();
        Self {
            masked: masked.to_string(),
            mask_indices,
        }
    }

    /// Returns the masked word, which is also the puzzle identifier.
    pub fn masked(&self) -> &str {
        &self.masked
    }

    /// Returns the hidden positions in ascending order.
    pub fn mask_indices(&self) -> &[usize] {
        &self.mask_indices
    }

    /// Returns the word length in characters.
    pub fn len(&self) -> usize {
        self.masked.chars().count()
    }

    /// Returns true for the degenerate empty word.
    pub fn is_empty(&self) -> bool {
        self.masked.is_empty()
    }

    /// Checks that `word` has the puzzle's length and agrees with every fixed
    /// (non-mask) position.
    pub fn matches_fixed(&self, word: &str) -> bool {
        let word: Vec<char> = word.chars().collect();
        if word.len() != self.len() {
            return false;
        }
        self.masked
            .chars()
            .enumerate()
            .filter(|(idx, _)| !self.mask_indices.contains(idx))
            .all(|(idx, fixed)| word[idx] == fixed)
    }
}

/// Candidate report produced by a word finder for a single puzzle.
///
/// Mirrors what the search backend knows: the mask positions it generated
/// guesses for, the guesses themselves, and whether the search succeeded at
/// all. A report with `found == false` contributes nothing to the ledger and
/// leaves its puzzle to random fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    /// Mask positions the candidates were generated for.
    pub mask_indices: Vec<usize>,
    /// Full-length candidate words, one per guess.
    #[serde(default)]
    pub candidates: Vec<String>,
    /// Whether the candidate search succeeded for this puzzle.
    pub found: bool,
}

impl CandidateSet {
    /// Creates a successful report carrying the given candidates.
    pub fn new(mask_indices: Vec<usize>, candidates: Vec<impl Into<String>>) -> Self {
        Self {
            mask_indices,
            candidates: candidates.into_iter().map(Into::into).collect(),
            found: true,
        }
    }

    /// Creates a failed report: the search produced nothing usable.
    pub fn not_found(mask_indices: Vec<usize>) -> Self {
        Self {
            mask_indices,
            candidates: Vec::new(),
            found: false,
        }
    }
}

/// Ordered set of letters the solver may commit or fill with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// The lowercase ASCII alphabet `a..=z`.
    pub fn ascii_lowercase() -> Self {
        Self {
            letters: ('a'..='z').collect(),
        }
    }

    /// Builds an alphabet from arbitrary letters, dropping duplicates while
    /// preserving first-seen order.
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        let mut seen = Vec::new();
        for letter in letters {
            if !seen.contains(&letter) {
                seen.push(letter);
            }
        }
        Self { letters: seen }
    }

    /// Returns the letters in order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true when the alphabet holds no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns true when `letter` belongs to the alphabet.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii_lowercase()
    }
}
