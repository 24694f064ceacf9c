use std::collections::BTreeMap;

use log::debug;
use soup_core::{CandidateSet, Puzzle, SoupError, WordFinder};

/// Finder that answers from a prebuilt report map.
///
/// Useful wherever candidate search already happened (fixtures, replayed
/// experiments); puzzles missing from the map come back as failed searches
/// rather than errors, leaving them to random fill.
#[derive(Debug, Clone, Default)]
pub struct StaticWordFinder {
    reports: BTreeMap<String, CandidateSet>,
}

impl StaticWordFinder {
    /// Wraps an existing report map keyed by masked word.
    pub fn new(reports: BTreeMap<String, CandidateSet>) -> Self {
        Self { reports }
    }
}

impl WordFinder for StaticWordFinder {
    fn name(&self) -> &str {
        "static"
    }

    fn candidates(&self, puzzle: &Puzzle) -> Result<CandidateSet, SoupError> {
        Ok(self
            .reports
            .get(puzzle.masked())
            .cloned()
            .unwrap_or_else(|| CandidateSet::not_found(puzzle.mask_indices().to_vec())))
    }
}

/// Collects one candidate report per puzzle from the finder.
pub fn collect_reports(
    finder: &dyn WordFinder,
    puzzles: &[Puzzle],
) -> Result<BTreeMap<String, CandidateSet>, SoupError> {
    let mut reports = BTreeMap::new();
    for puzzle in puzzles {
        debug!("collecting candidates for {}", puzzle.masked());
        let report = finder.candidates(puzzle)?;
        reports.insert(puzzle.masked().to_string(), report);
    }
    Ok(reports)
}
