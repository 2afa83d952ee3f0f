use crate::domain::models::Player;
use crate::errors::PairingError;
use super::types::Rating;

pub const DEFAULT_BASE: Rating = 1000;
pub const DEFAULT_STEP: Rating = 10;

/// Spreads a pool evenly over a synthetic scale so that only rank order
/// matters to the weights.
#[derive(Debug, Clone, Copy)]
pub struct RatingNormalizer {
    base: Rating,
    step: Rating,
}

impl Default for RatingNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, DEFAULT_STEP)
    }
}

impl RatingNormalizer {
    pub fn new(base: Rating, step: Rating) -> Self {
        Self { base, step }
    }

    /// Returns new players rated `base + step`, `base + 2 * step`, ... from
    /// the lowest original rating up, ordered highest first.
    pub fn normalize(&self, pool: &[Player]) -> Result<Vec<Player>, PairingError> {
        if pool.is_empty() {
            return Err(PairingError::EmptyPool);
        }

        let ascending = sort_ascending(pool);
        let mut normalized = self.assign_ratings(&ascending)?;
        normalized.reverse();
        Ok(normalized)
    }

    fn assign_ratings(&self, ascending: &[&Player]) -> Result<Vec<Player>, PairingError> {
        ascending
            .iter()
            .enumerate()
            .map(|(idx, player)| Ok(player.with_rating(self.rating_at(idx + 1)?)))
            .collect()
    }

    /// `base + step * rank`, computed wide and range checked
    fn rating_at(&self, rank: usize) -> Result<Rating, PairingError> {
        let overflow = || PairingError::RatingOverflow {
            base: self.base,
            step: self.step,
            rank,
        };
        let rank_wide = i64::try_from(rank).map_err(|_| overflow())?;
        i64::from(self.step)
            .checked_mul(rank_wide)
            .and_then(|offset| offset.checked_add(i64::from(self.base)))
            .and_then(|rating| Rating::try_from(rating).ok())
            .ok_or_else(overflow)
    }
}

fn sort_ascending(pool: &[Player]) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = pool.iter().collect();
    // stable: equal ratings keep input order
    sorted.sort_by_key(|player| player.rating);
    sorted
}
