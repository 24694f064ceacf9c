use rand::seq::SliceRandom;
use rand::RngCore;
use soup_core::RngHandle;

use crate::ledger::WorkingLedger;

/// Picks the letter to resolve next.
///
/// Scans the (shuffled) remaining letters for one with exactly one
/// association, then exactly two, then exactly three; when every remaining
/// letter carries more than three, a uniformly random letter is taken
/// instead of scanning further. Working through the least ambiguous letters
/// first wastes fewer commitments, and the shuffle keeps repeated attempts
/// from replaying the same order.
pub fn choose_next_letter(working: &WorkingLedger<'_>, rng: &mut RngHandle) -> Option<char> {
    let mut letters = working.letters();
    if letters.is_empty() {
        return None;
    }
    letters.shuffle(rng);
    for target in 1..=3 {
        for &letter in &letters {
            if working.entry_count(letter) == target {
                return Some(letter);
            }
        }
    }
    Some(letters[(rng.next_u64() as usize) % letters.len()])
}
