use std::collections::BTreeMap;

use soup_core::{CandidateSet, Puzzle, RngHandle};
use soup_solver::{determinism, run, Ledger, RunConfig};

fn sample_batch() -> (Vec<Puzzle>, BTreeMap<String, CandidateSet>) {
    let mut reports = BTreeMap::new();
    reports.insert(
        "0ri0t".to_string(),
        CandidateSet::new(vec![0, 3], vec!["print", "drift", "wrist", "grist"]),
    );
    reports.insert(
        "0o0ey".to_string(),
        CandidateSet::new(vec![0, 2], vec!["coley", "dovey", "money", "honey"]),
    );
    reports.insert(
        "0ebr0".to_string(),
        CandidateSet::new(vec![0, 4], vec!["zebra"]),
    );
    reports.insert("00amy".to_string(), CandidateSet::not_found(vec![0, 1]));
    let puzzles = reports.keys().map(|masked| Puzzle::parse(masked)).collect();
    (puzzles, reports)
}

fn deterministic_config(master_seed: u64) -> RunConfig {
    let mut config = RunConfig::default();
    config.epochs = 3;
    config.seed_policy.master_seed = master_seed;
    config
}

#[test]
fn repeated_runs_with_same_seed_match() {
    let (puzzles, reports) = sample_batch();
    let config = deterministic_config(2024);

    let runs_a = run(&config, &puzzles, &reports).unwrap();
    let runs_b = run(&config, &puzzles, &reports).unwrap();

    assert_eq!(runs_a, runs_b);
}

#[test]
fn one_assignment_per_epoch_and_starting_letter() {
    let (puzzles, reports) = sample_batch();
    let config = deterministic_config(2024);

    let ledger = Ledger::build(&reports).unwrap();
    let mut pad_rng = RngHandle::from_seed(determinism::padding_seed(
        config.seed_policy.master_seed,
    ));
    let seeds = ledger.derive_seeds(&config.alphabet, &mut pad_rng).unwrap();

    let runs = run(&config, &puzzles, &reports).unwrap();
    assert_eq!(runs.len(), config.epochs * seeds.starting.len());
}

#[test]
fn every_assignment_covers_every_puzzle() {
    let (puzzles, reports) = sample_batch();
    let config = deterministic_config(7);

    for assignment in run(&config, &puzzles, &reports).unwrap() {
        assert_eq!(assignment.len(), puzzles.len());
        for puzzle in &puzzles {
            let decoded = &assignment[puzzle.masked()];
            assert!(puzzle.matches_fixed(decoded), "{decoded} vs {}", puzzle.masked());
        }
    }
}

#[test]
fn different_master_seeds_diverge() {
    let (puzzles, reports) = sample_batch();

    let runs_a = run(&deterministic_config(1), &puzzles, &reports).unwrap();
    let runs_b = run(&deterministic_config(2), &puzzles, &reports).unwrap();

    assert_ne!(runs_a, runs_b);
}
