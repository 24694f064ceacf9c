#![deny(missing_docs)]

//! Core types and traits for the alphabet-soup decoding engine.
//!
//! The engine decodes a batch of masked words by committing letters to
//! puzzles under a global one-letter-one-puzzle policy. This crate holds the
//! vocabulary shared by the solver and its collaborators: puzzles, candidate
//! reports, alphabets, the structured error type, and the deterministic RNG
//! handle every randomized step draws from.

pub mod errors;
mod puzzle;
pub mod rng;

pub use errors::{ErrorInfo, SoupError};
pub use puzzle::{Alphabet, Assignment, CandidateSet, Puzzle, MASK_SYMBOL};
pub use rng::{derive_substream_seed, RngHandle};

/// Candidate search backend that proposes full-length guesses for a puzzle.
///
/// Implementations wrap whatever lexical service is available. The engine
/// trusts the reports: it never checks that a candidate is a real word, only
/// that it fits the puzzle shape.
pub trait WordFinder: Send + Sync {
    /// Label identifying the backend in experiment records.
    fn name(&self) -> &str;

    /// Returns the candidate report for a single puzzle.
    fn candidates(&self, puzzle: &Puzzle) -> Result<CandidateSet, SoupError>;
}
