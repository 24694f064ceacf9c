use soup_core::{Alphabet, CandidateSet, Puzzle};

#[test]
fn parse_collects_mask_positions_in_order() {
    let puzzle = Puzzle::parse("0ri0t");
    assert_eq!(puzzle.masked(), "0ri0t");
    assert_eq!(puzzle.mask_indices(), &[0, 3]);
    assert_eq!(puzzle.len(), 5);
}

#[test]
fn custom_mask_symbol_is_honored() {
    let puzzle = Puzzle::with_mask_symbol("_ri_t", '_');
    assert_eq!(puzzle.mask_indices(), &[0, 3]);
}

#[test]
fn fully_revealed_word_has_no_mask_positions() {
    let puzzle = Puzzle::parse("wrist");
    assert!(puzzle.mask_indices().is_empty());
}

#[test]
fn matches_fixed_checks_length_and_revealed_letters() {
    let puzzle = Puzzle::parse("0ri0t");
    assert!(puzzle.matches_fixed("wrist"));
    assert!(puzzle.matches_fixed("print"));
    assert!(!puzzle.matches_fixed("wrest"));
    assert!(!puzzle.matches_fixed("wrists"));
}

#[test]
fn candidate_set_constructors_set_the_found_flag() {
    let hit = CandidateSet::new(vec![0, 3], vec!["wrist", "print"]);
    assert!(hit.found);
    assert_eq!(hit.candidates.len(), 2);

    let miss = CandidateSet::not_found(vec![0, 1]);
    assert!(!miss.found);
    assert!(miss.candidates.is_empty());
}

#[test]
fn alphabet_deduplicates_and_keeps_order() {
    let alphabet = Alphabet::from_letters("banana".chars());
    assert_eq!(alphabet.letters(), &['b', 'a', 'n']);
    assert!(alphabet.contains('n'));
    assert!(!alphabet.contains('z'));

    assert_eq!(Alphabet::ascii_lowercase().len(), 26);
}

#[test]
fn puzzle_and_report_round_trip_through_json() {
    let puzzle = Puzzle::parse("0e00est");
    let json = serde_json::to_string(&puzzle).unwrap();
    let back: Puzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(puzzle, back);

    let report = CandidateSet::new(vec![0, 2, 3], vec!["request", "bequest"]);
    let json = serde_json::to_string(&report).unwrap();
    let back: CandidateSet = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
}
