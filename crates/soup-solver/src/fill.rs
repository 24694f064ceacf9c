use rand::RngCore;
use soup_core::{Alphabet, Puzzle, RngHandle};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Decodes a leftover puzzle from the unassigned-letter pool.
///
/// Mask positions are filled in order. A vowel is only eligible away from
/// the word's first position; the first position takes the first pooled
/// consonant; when nothing in the pool fits the position's class, the first
/// pooled letter is taken regardless. Chosen letters leave the pool
/// immediately and are never reused. Should the pool run dry, the remaining
/// positions draw random alphabet letters not yet placed in this word, so
/// mask positions stay pairwise distinct.
///
/// The alphabet must be non-empty.
pub fn random_fill(
    puzzle: &Puzzle,
    pool: &mut Vec<char>,
    alphabet: &Alphabet,
    rng: &mut RngHandle,
) -> String {
    let mut decoded: Vec<char> = puzzle.masked().chars().collect();
    let mut placed: Vec<char> = Vec::with_capacity(puzzle.mask_indices().len());
    for &idx in puzzle.mask_indices() {
        let letter = match take_preferred(pool, idx) {
            Some(letter) => letter,
            None => draw_fresh(&placed, alphabet, rng),
        };
        decoded[idx] = letter;
        placed.push(letter);
    }
    decoded.into_iter().collect()
}

fn take_preferred(pool: &mut Vec<char>, position: usize) -> Option<char> {
    if pool.is_empty() {
        return None;
    }
    let slot = pool
        .iter()
        .position(|&letter| {
            if VOWELS.contains(&letter) {
                position > 0
            } else {
                position == 0
            }
        })
        .unwrap_or(0);
    Some(pool.remove(slot))
}

fn draw_fresh(placed: &[char], alphabet: &Alphabet, rng: &mut RngHandle) -> char {
    let fresh: Vec<char> = alphabet
        .letters()
        .iter()
        .copied()
        .filter(|letter| !placed.contains(letter))
        .collect();
    if fresh.is_empty() {
        let letters = alphabet.letters();
        return letters[(rng.next_u64() as usize) % letters.len()];
    }
    fresh[(rng.next_u64() as usize) % fresh.len()]
}
