use soup_core::derive_substream_seed;

/// Derives the deterministic seed for a single resolution attempt.
pub fn attempt_seed(master_seed: u64, epoch: usize, slot: usize) -> u64 {
    derive_substream_seed(master_seed, (epoch as u64) << 32 | slot as u64)
}

/// Derives the deterministic seed used when padding the starting letters.
pub fn padding_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed ^ 0x5A5A_5A5A_5A5A_5A5A, 0)
}
