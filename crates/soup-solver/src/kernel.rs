use std::collections::BTreeMap;

use log::debug;
use rand::seq::SliceRandom;
use soup_core::{Alphabet, Assignment, CandidateSet, Puzzle, RngHandle, SoupError};

use crate::config::RunConfig;
use crate::determinism;
use crate::fill::random_fill;
use crate::ledger::{Ledger, SeedSet, WorkingLedger};
use crate::pick::choose_next_letter;

/// Decodes the batch end to end: builds the ledger from the finder reports,
/// derives the seed letters, and runs every configured attempt.
///
/// Produces `epochs × |starting letters|` complete assignments in epoch-major
/// order. The only failures are malformed reports and degenerate alphabets;
/// resolution itself always completes.
pub fn run(
    config: &RunConfig,
    puzzles: &[Puzzle],
    reports: &BTreeMap<String, CandidateSet>,
) -> Result<Vec<Assignment>, SoupError> {
    let ledger = Ledger::build(reports)?;
    let mut pad_rng =
        RngHandle::from_seed(determinism::padding_seed(config.seed_policy.master_seed));
    let seeds = ledger.derive_seeds(&config.alphabet, &mut pad_rng)?;
    Ok(run_epochs(config, puzzles, &ledger, &seeds))
}

/// Runs `config.epochs` sweeps over the starting letters, one resolution
/// attempt per (epoch, starting letter) pair, collecting every assignment in
/// generation order.
///
/// Each attempt gets its own substream-seeded RNG, so attempts are
/// reproducible and independent of one another.
pub fn run_epochs(
    config: &RunConfig,
    puzzles: &[Puzzle],
    ledger: &Ledger,
    seeds: &SeedSet,
) -> Vec<Assignment> {
    let mut assignments = Vec::with_capacity(config.epochs * seeds.starting.len());
    for epoch in 0..config.epochs {
        debug!("epoch {} of {}", epoch + 1, config.epochs);
        for (slot, &starting_letter) in seeds.starting.iter().enumerate() {
            let mut rng = RngHandle::from_seed(determinism::attempt_seed(
                config.seed_policy.master_seed,
                epoch,
                slot,
            ));
            assignments.push(resolve_once(
                starting_letter,
                ledger,
                &seeds.unassigned,
                puzzles,
                &config.alphabet,
                &mut rng,
            ));
        }
    }
    assignments
}

/// One greedy resolution attempt seeded with `starting_letter`.
///
/// Letters are committed to puzzles while the working ledger lasts; each
/// loop turn retires at least one letter, so the loop runs at most once per
/// alphabet letter. Puzzles left unresolved afterwards (including those
/// whose candidate search failed) are completed with [`random_fill`]. The
/// returned assignment always covers every puzzle.
pub fn resolve_once(
    starting_letter: char,
    ledger: &Ledger,
    unassigned: &[char],
    puzzles: &[Puzzle],
    alphabet: &Alphabet,
    rng: &mut RngHandle,
) -> Assignment {
    let mut working = WorkingLedger::new(ledger);
    let mut pool: Vec<char> = unassigned.to_vec();
    let mut assignment = Assignment::new();
    let mut use_starting_letter = true;

    while !working.is_empty() {
        let letter = if use_starting_letter {
            use_starting_letter = false;
            starting_letter
        } else {
            match choose_next_letter(&working, rng) {
                Some(letter) => letter,
                None => break,
            }
        };
        match commit_letter(letter, &working, ledger, rng) {
            Some((puzzle, word)) => {
                retire_commitment(&mut working, &mut pool, ledger, &puzzle, &word);
                assignment.insert(puzzle, word);
            }
            None => {
                working.retire_letter(letter);
                if !pool.contains(&letter) {
                    pool.push(letter);
                }
            }
        }
    }

    let mut leftovers: Vec<&Puzzle> = puzzles
        .iter()
        .filter(|puzzle| !assignment.contains_key(puzzle.masked()))
        .collect();
    leftovers.shuffle(rng);
    pool.shuffle(rng);
    for puzzle in leftovers {
        let word = random_fill(puzzle, &mut pool, alphabet, rng);
        assignment.insert(puzzle.masked().to_string(), word);
    }
    assignment
}

/// Tries to resolve one puzzle with a candidate listed under `letter`.
///
/// Candidates are visited in shuffled order; the first one whose mask
/// letters are all still present in the working ledger wins.
fn commit_letter(
    letter: char,
    working: &WorkingLedger<'_>,
    ledger: &Ledger,
    rng: &mut RngHandle,
) -> Option<(String, String)> {
    let mut candidates = working.candidates(letter);
    candidates.shuffle(rng);
    for (word, puzzle) in candidates {
        let Some(mask_indices) = ledger.mask_indices(puzzle) else {
            continue;
        };
        let letters: Vec<char> = word.chars().collect();
        let viable = mask_indices.iter().all(|&idx| working.contains(letters[idx]));
        if viable {
            return Some((puzzle.to_string(), word.to_string()));
        }
    }
    None
}

/// Spends the letters used by an accepted candidate and sweeps the resolved
/// puzzle's remaining candidates out of the working ledger. Letters whose
/// entries empty out move to the unassigned pool.
fn retire_commitment(
    working: &mut WorkingLedger<'_>,
    pool: &mut Vec<char>,
    ledger: &Ledger,
    puzzle: &str,
    word: &str,
) {
    let letters: Vec<char> = word.chars().collect();
    if let Some(mask_indices) = ledger.mask_indices(puzzle) {
        for &idx in mask_indices {
            working.retire_letter(letters[idx]);
        }
    }
    pool.extend(working.clear_puzzle(puzzle));
}
