use log::debug;

use crate::domain::clock::Clock;
use crate::domain::models::Player;
use crate::domain::preference_map::PreferenceMap;
use crate::domain::registry::PlayerRegistry;
use crate::errors::PairingError;
use crate::rating::{Opponent, RecencyBandedWeight, WeightPolicy};

use super::history::{MatchHistorySource, OpponentHistoryIndex};
use super::strategy::PreferenceStrategy;

/// Builds "who would I most like to play next" lists for a pool.
pub struct PreferenceBuilder<'a, W: WeightPolicy = RecencyBandedWeight> {
    history: &'a dyn MatchHistorySource,
    clock: &'a dyn Clock,
    strategy: &'a dyn PreferenceStrategy,
    policy: W,
    window_days: i64,
}

impl<'a> PreferenceBuilder<'a> {
    pub fn new(
        history: &'a dyn MatchHistorySource,
        clock: &'a dyn Clock,
        strategy: &'a dyn PreferenceStrategy,
        window_days: i64,
    ) -> Self {
        Self {
            history,
            clock,
            strategy,
            policy: RecencyBandedWeight,
            window_days,
        }
    }
}

impl<'a, W: WeightPolicy> PreferenceBuilder<'a, W> {
    /// Swap the scoring policy, keeping everything else.
    pub fn with_policy<P: WeightPolicy>(self, policy: P) -> PreferenceBuilder<'a, P> {
        PreferenceBuilder {
            history: self.history,
            clock: self.clock,
            strategy: self.strategy,
            policy,
            window_days: self.window_days,
        }
    }

    /// Preference map for every named player, keyed in canonical pool order.
    ///
    /// All names are validated before any weight is computed.
    pub fn build_all(
        &self,
        pool_names: &[String],
        all_players: &[Player],
    ) -> Result<PreferenceMap, PairingError> {
        if pool_names.is_empty() {
            return Err(PairingError::EmptyPool);
        }

        let registry = PlayerRegistry::new(all_players.to_vec())?;
        let selected = registry.select(pool_names)?;
        let pool = self.strategy.canonical_pool(&selected)?;

        let mut preferences = PreferenceMap::new();
        for player in &pool {
            let opponents = self.build(&player.name, &pool)?;
            preferences.insert(player.name.clone(), opponents);
        }
        Ok(preferences)
    }

    /// Every other pool member, most preferred first.
    pub fn build(&self, player_name: &str, pool: &[Player]) -> Result<Vec<String>, PairingError> {
        let opponents = self.ranked_opponents(player_name, pool)?;
        Ok(opponents.into_iter().map(|opponent| opponent.name).collect())
    }

    /// Weighed opponents sorted ascending; equal weights keep pool order.
    pub fn ranked_opponents(
        &self,
        player_name: &str,
        pool: &[Player],
    ) -> Result<Vec<Opponent>, PairingError> {
        if pool.is_empty() {
            return Err(PairingError::EmptyPool);
        }

        let player = pool
            .iter()
            .find(|p| p.name == player_name)
            .ok_or_else(|| PairingError::not_found(player_name))?;

        let mut opponents = self.weigh_opponents(player, pool);
        opponents.sort_by_key(|opponent| opponent.weight);
        Ok(opponents)
    }

    fn weigh_opponents(&self, player: &Player, pool: &[Player]) -> Vec<Opponent> {
        let index = OpponentHistoryIndex::build(
            self.history.records_for(player),
            self.window_days,
            self.clock,
        );
        debug!(
            "{} has history against {} opponents within {} days",
            player.name,
            index.opponent_count(),
            self.window_days
        );
        let today = self.clock.today();

        pool.iter()
            .filter(|opponent| opponent.name != player.name)
            .map(|opponent| {
                let weight = self.policy.weigh(
                    player.rating,
                    opponent.rating,
                    index.dates_against(&opponent.name),
                    today,
                );
                debug!("{} vs {}: weight {}", player.name, opponent.name, weight);
                Opponent::new(&opponent.name, weight)
            })
            .collect()
    }
}
