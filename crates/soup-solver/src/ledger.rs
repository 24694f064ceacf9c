use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use soup_core::errors::ErrorInfo;
use soup_core::{Alphabet, CandidateSet, RngHandle, SoupError};

/// Per-letter index of viable (candidate, puzzle) associations.
///
/// Built once from the finder reports and never mutated afterwards. Each
/// resolution attempt takes a borrowed [`WorkingLedger`] view and shrinks
/// that instead, which keeps attempts isolated without copying any words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: BTreeMap<char, BTreeMap<String, String>>,
    masks: BTreeMap<String, Vec<usize>>,
}

impl Ledger {
    /// Indexes every valid candidate from the per-puzzle reports.
    ///
    /// Reports with `found == false` contribute nothing. A candidate is valid
    /// when the letters it places at the mask positions are pairwise
    /// distinct; invalid candidates are skipped silently. A report marked
    /// found with no candidates, a candidate of the wrong length, or a mask
    /// position outside the word is malformed input and rejected.
    pub fn build(reports: &BTreeMap<String, CandidateSet>) -> Result<Self, SoupError> {
        let mut ledger = Ledger::default();
        for (puzzle, report) in reports {
            if !report.found {
                continue;
            }
            if report.candidates.is_empty() {
                return Err(SoupError::Candidates(
                    ErrorInfo::new(
                        "missing-candidate-list",
                        "report marked found but carries no candidates",
                    )
                    .with_context("puzzle", puzzle.clone()),
                ));
            }
            let expected_len = puzzle.chars().count();
            if let Some(&bad) = report.mask_indices.iter().find(|&&idx| idx >= expected_len) {
                return Err(SoupError::Candidates(
                    ErrorInfo::new("mask-index-out-of-range", "mask position outside the puzzle")
                        .with_context("puzzle", puzzle.clone())
                        .with_context("index", bad.to_string()),
                ));
            }
            for candidate in &report.candidates {
                let letters: Vec<char> = candidate.chars().collect();
                if letters.len() != expected_len {
                    return Err(SoupError::Candidates(
                        ErrorInfo::new(
                            "candidate-length-mismatch",
                            "candidate length differs from its puzzle",
                        )
                        .with_context("puzzle", puzzle.clone())
                        .with_context("candidate", candidate.clone()),
                    ));
                }
                let Some(mask_letters) = distinct_mask_letters(&letters, &report.mask_indices)
                else {
                    continue;
                };
                for letter in mask_letters {
                    ledger
                        .entries
                        .entry(letter)
                        .or_default()
                        .insert(candidate.clone(), puzzle.clone());
                }
            }
            ledger.masks.insert(puzzle.clone(), report.mask_indices.clone());
        }
        Ok(ledger)
    }

    /// Returns the number of letters holding at least one association.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no letter holds an association.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of (candidate, puzzle) associations held under `letter`.
    pub fn entry_count(&self, letter: char) -> usize {
        self.entries.get(&letter).map_or(0, BTreeMap::len)
    }

    /// Candidate words listed under `letter`, with the puzzles they answer.
    pub fn candidates(&self, letter: char) -> Vec<(&str, &str)> {
        self.entries
            .get(&letter)
            .map(|assoc| {
                assoc
                    .iter()
                    .map(|(candidate, puzzle)| (candidate.as_str(), puzzle.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Mask positions recorded for a successfully searched puzzle.
    pub fn mask_indices(&self, puzzle: &str) -> Option<&[usize]> {
        self.masks.get(puzzle).map(Vec::as_slice)
    }

    /// Scans the alphabet against the ledger: letters with exactly one
    /// association become starting letters, letters with none are unassigned.
    /// When fewer than two starting letters exist, random assigned letters
    /// pad the set until exactly two are available.
    pub fn derive_seeds(
        &self,
        alphabet: &Alphabet,
        rng: &mut RngHandle,
    ) -> Result<SeedSet, SoupError> {
        if alphabet.is_empty() {
            return Err(SoupError::Seed(ErrorInfo::new(
                "empty-alphabet",
                "cannot derive seed letters from an empty alphabet",
            )));
        }
        let mut starting = Vec::new();
        let mut unassigned = Vec::new();
        for &letter in alphabet.letters() {
            match self.entry_count(letter) {
                0 => unassigned.push(letter),
                1 => starting.push(letter),
                _ => {}
            }
        }
        if starting.len() < 2 {
            let mut pad_pool: Vec<char> = alphabet
                .letters()
                .iter()
                .copied()
                .filter(|letter| !unassigned.contains(letter) && !starting.contains(letter))
                .collect();
            pad_pool.shuffle(rng);
            while starting.len() < 2 {
                let Some(letter) = pad_pool.pop() else {
                    return Err(SoupError::Seed(
                        ErrorInfo::new(
                            "seed-letters-exhausted",
                            "alphabet cannot supply two starting letters",
                        )
                        .with_context("starting", starting.len().to_string()),
                    ));
                };
                starting.push(letter);
            }
        }
        Ok(SeedSet {
            starting,
            unassigned,
        })
    }
}

/// Starting and unassigned letters derived from a freshly built ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSet {
    /// Letters whose single association makes them unambiguous entry points.
    pub starting: Vec<char>,
    /// Letters with no associations, available to the random fill.
    pub unassigned: Vec<char>,
}

/// Mutable view over a [`Ledger`] scoped to a single resolution attempt.
///
/// Holds string slices borrowed from the base ledger, so taking a working
/// copy never clones a word; retiring letters and clearing resolved puzzles
/// only ever shrink the view.
#[derive(Debug, Clone)]
pub struct WorkingLedger<'a> {
    entries: BTreeMap<char, BTreeMap<&'a str, &'a str>>,
}

impl<'a> WorkingLedger<'a> {
    /// Borrows the full ledger as a fresh working view.
    pub fn new(base: &'a Ledger) -> Self {
        let entries = base
            .entries
            .iter()
            .map(|(&letter, assoc)| {
                let assoc = assoc
                    .iter()
                    .map(|(candidate, puzzle)| (candidate.as_str(), puzzle.as_str()))
                    .collect();
                (letter, assoc)
            })
            .collect();
        Self { entries }
    }

    /// Returns true when no letter has associations left.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true while `letter` still has at least one association.
    pub fn contains(&self, letter: char) -> bool {
        self.entries.contains_key(&letter)
    }

    /// Letters that still carry associations.
    pub fn letters(&self) -> Vec<char> {
        self.entries.keys().copied().collect()
    }

    /// Number of associations left under `letter`.
    pub fn entry_count(&self, letter: char) -> usize {
        self.entries.get(&letter).map_or(0, BTreeMap::len)
    }

    /// Candidate words still listed under `letter`, with their puzzles.
    pub fn candidates(&self, letter: char) -> Vec<(&'a str, &'a str)> {
        self.entries
            .get(&letter)
            .map(|assoc| assoc.iter().map(|(&c, &p)| (c, p)).collect())
            .unwrap_or_default()
    }

    /// Drops `letter` and everything listed under it.
    pub fn retire_letter(&mut self, letter: char) {
        self.entries.remove(&letter);
    }

    /// Removes every association pointing at a resolved puzzle and sweeps
    /// out letters left with nothing. The swept letters are returned so the
    /// caller can move them to the unassigned pool.
    pub fn clear_puzzle(&mut self, puzzle: &str) -> Vec<char> {
        let mut swept = Vec::new();
        self.entries.retain(|&letter, assoc| {
            assoc.retain(|_, target| *target != puzzle);
            if assoc.is_empty() {
                swept.push(letter);
                false
            } else {
                true
            }
        });
        swept
    }
}

fn distinct_mask_letters(word: &[char], mask_indices: &[usize]) -> Option<Vec<char>> {
    let mut letters = Vec::with_capacity(mask_indices.len());
    for &idx in mask_indices {
        let letter = word[idx];
        if letters.contains(&letter) {
            return None;
        }
        letters.push(letter);
    }
    Some(letters)
}
