#![deny(missing_docs)]

//! Constraint-directed letter-assignment engine for masked-word batches.
//!
//! Given a batch of puzzles and per-puzzle candidate reports, the engine
//! builds a per-letter ledger of viable (candidate, puzzle) associations,
//! derives seed letters from it, and then runs many independent randomized
//! resolution attempts. Each attempt greedily commits letters to puzzles
//! under a global one-letter-one-puzzle policy and completes whatever is
//! left through a heuristic random fill, so every attempt yields a full
//! assignment. Repeated attempts across epochs and starting letters stand in
//! for exhaustive search; downstream scoring picks the winners.

/// Run parameters and seeding policy.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Heuristic random fill for puzzles the commit loop leaves unresolved.
pub mod fill;
/// Resolution kernel and the public `run`/`run_epochs` entry points.
pub mod kernel;
/// Candidate ledger construction and per-attempt working views.
pub mod ledger;
/// Letter-choice heuristic for the resolution loop.
pub mod pick;

pub use config::{RunConfig, SeedPolicy};
pub use kernel::{resolve_once, run, run_epochs};
pub use ledger::{Ledger, SeedSet, WorkingLedger};
