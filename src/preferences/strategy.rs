use crate::domain::models::Player;
use crate::errors::PairingError;
use crate::rating::RatingNormalizer;

/// Turns the selected pool into the canonical pool preferences are built on.
pub trait PreferenceStrategy {
    fn canonical_pool(&self, pool: &[Player]) -> Result<Vec<Player>, PairingError>;
}

/// Weighs players by rank within the pool rather than by raw rating
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedStrategy {
    normalizer: RatingNormalizer,
}

impl NormalizedStrategy {
    pub fn new(normalizer: RatingNormalizer) -> Self {
        Self { normalizer }
    }
}

impl PreferenceStrategy for NormalizedStrategy {
    fn canonical_pool(&self, pool: &[Player]) -> Result<Vec<Player>, PairingError> {
        self.normalizer.normalize(pool)
    }
}
