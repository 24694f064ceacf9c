use serde::{Deserialize, Serialize};
use soup_core::Alphabet;

/// Parameters governing a decoding run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of epochs to execute; each epoch resolves once per starting
    /// letter.
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    /// Letters available for commitment and random fill.
    #[serde(default)]
    pub alphabet: Alphabet,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_epochs() -> usize {
    75
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            epochs: default_epochs(),
            alphabet: Alphabet::default(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label used when deriving substream seeds (documented in
    /// experiment records).
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0xA1FA_BE70_50A9_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}
