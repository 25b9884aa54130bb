use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Engine-wide settings.
///
/// `rng_seed: Some(_)` makes every shuffle reproducible, which is what
/// tests and replayed sessions want; `None` seeds from OS entropy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    pub fn seeded(seed: u64) -> Self {
        EngineConfig { rng_seed: Some(seed) }
    }

    /// Randomness source for presentation-order shuffles.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}
