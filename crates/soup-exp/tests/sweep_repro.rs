use std::collections::BTreeMap;

use soup_core::{CandidateSet, Puzzle, WordFinder};
use soup_exp::{collect_reports, run_experiment, sweep_epochs, AnswerKey, EpochSweepPlan, StaticWordFinder};
use soup_solver::RunConfig;

fn sample_reports() -> BTreeMap<String, CandidateSet> {
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
    reports
}

fn sample_puzzles() -> Vec<Puzzle> {
    vec![
        Puzzle::parse("0ri0t"),
        Puzzle::parse("0o0ey"),
        Puzzle::parse("0ebr0"),
        Puzzle::parse("00amy"),
    ]
}

fn sample_key() -> AnswerKey {
    AnswerKey::from_pairs([
        ("0ri0t", "wrist"),
        ("0o0ey", "money"),
        ("0ebr0", "zebra"),
        ("00amy", "foamy"),
    ])
}

fn sample_plan() -> EpochSweepPlan {
    let mut base = RunConfig::default();
    base.epochs = 2;
    base.seed_policy.master_seed = 99;
    EpochSweepPlan {
        epoch_counts: vec![1, 2, 4],
        base,
    }
}

#[test]
fn unknown_puzzles_come_back_as_failed_searches() {
    let finder = StaticWordFinder::new(sample_reports());
    let reports = collect_reports(&finder, &sample_puzzles()).unwrap();

    assert_eq!(reports.len(), 4);
    assert!(reports["0ri0t"].found);
    assert!(!reports["00amy"].found);
    assert_eq!(reports["00amy"].mask_indices, vec![0, 1]);
}

#[test]
fn experiment_record_carries_label_epochs_and_params_hash() {
    let finder = StaticWordFinder::new(sample_reports());
    let mut config = RunConfig::default();
    config.epochs = 2;

    let record = run_experiment(&config, &sample_puzzles(), &finder, &sample_key()).unwrap();

    assert_eq!(record.finder, finder.name());
    assert_eq!(record.epochs, 2);
    assert!(!record.params_hash.is_empty());
    assert!(record.summary.runs > 0);
    assert!(record.elapsed_seconds >= 0.0);
}

#[test]
fn sweeps_replay_bit_for_bit_from_their_plan() {
    let finder = StaticWordFinder::new(sample_reports());
    let plan = sample_plan();

    let report_a = sweep_epochs(&plan, &sample_puzzles(), &finder, &sample_key()).unwrap();
    let report_b = sweep_epochs(&plan, &sample_puzzles(), &finder, &sample_key()).unwrap();

    assert_eq!(report_a, report_b);
    assert_eq!(report_a.jobs.len(), 3);
    assert_eq!(
        report_a.jobs.iter().map(|job| job.epochs).collect::<Vec<_>>(),
        vec![1, 2, 4]
    );
}

#[test]
fn sweep_jobs_use_distinct_derived_seeds() {
    let finder = StaticWordFinder::new(sample_reports());
    let plan = sample_plan();

    let report = sweep_epochs(&plan, &sample_puzzles(), &finder, &sample_key()).unwrap();

    let seeds: Vec<u64> = report.jobs.iter().map(|job| job.master_seed).collect();
    for (idx, seed) in seeds.iter().enumerate() {
        assert_ne!(*seed, plan.base.seed_policy.master_seed);
        for other in &seeds[idx + 1..] {
            assert_ne!(seed, other);
        }
    }
}

#[test]
fn plan_hash_tracks_the_plan_contents() {
    let finder = StaticWordFinder::new(sample_reports());
    let plan = sample_plan();
    let mut longer = sample_plan();
    longer.epoch_counts.push(8);

    let report_a = sweep_epochs(&plan, &sample_puzzles(), &finder, &sample_key()).unwrap();
    let report_b = sweep_epochs(&longer, &sample_puzzles(), &finder, &sample_key()).unwrap();

    assert_ne!(report_a.plan_hash, report_b.plan_hash);
}
