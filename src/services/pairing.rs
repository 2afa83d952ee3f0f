use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::cache::JsonStore;
use crate::config::AppConfig;
use crate::domain::clock::Clock;
use crate::domain::models::Player;
use crate::domain::preference_map::{Pairing, PreferenceMap};
use crate::domain::registry::PlayerRegistry;
use crate::fetchers::RankingsSource;
use crate::matching::{Matcher, StableRoommates};
use crate::preferences::{InMemoryHistory, NormalizedStrategy, PreferenceBuilder};
use crate::rating::RatingNormalizer;

/// Who to pair and where their data comes from
#[derive(Debug, Clone, Default)]
pub struct PoolRequest {
    pub names: Vec<String>,
    /// Read players from this snapshot instead of the rankings page
    pub players_file: Option<PathBuf>,
    pub match_history_days: Option<i64>,
}

/// Run the stable roommates matcher over a finished preference map.
pub fn pair_players(preferences: &PreferenceMap) -> Result<Pairing> {
    let pairing = StableRoommates.pair(preferences)?;
    info!("Paired {} players", pairing.len());
    Ok(pairing)
}

pub struct PairingService<S: RankingsSource> {
    config: AppConfig,
    source: S,
    store: JsonStore,
    clock: Box<dyn Clock>,
}

impl<S: RankingsSource> PairingService<S> {
    pub fn new(config: AppConfig, source: S, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            source,
            store: JsonStore::new(),
            clock,
        }
    }

    pub async fn build_preferences(&mut self, request: &PoolRequest) -> Result<PreferenceMap> {
        info!("=== Building Preferences for {} players ===", request.names.len());

        // Step 1: Load ranked players
        let players = self.load_players(request).await?;
        info!("  → {} ranked players available", players.len());

        // Step 2: Fetch match history for the pool only
        let history = self.fetch_pool_history(&request.names, &players).await?;
        info!("  → Fetched history for {} players", history.len());

        // Step 3: Weigh and rank opponents
        let window_days = request
            .match_history_days
            .unwrap_or(self.config.preferences.match_history_days);
        let strategy = NormalizedStrategy::new(RatingNormalizer::new(
            self.config.preferences.normalized_base,
            self.config.preferences.normalized_step,
        ));
        let builder = PreferenceBuilder::new(&history, self.clock.as_ref(), &strategy, window_days);
        let preferences = builder.build_all(&request.names, &players)?;

        info!("=== Preferences Complete ===");
        Ok(preferences)
    }

    pub fn pair(&self, preferences: &PreferenceMap) -> Result<Pairing> {
        pair_players(preferences)
    }

    async fn load_players(&mut self, request: &PoolRequest) -> Result<Vec<Player>> {
        match &request.players_file {
            Some(path) => self.store.load_players(path),
            None => self.source.fetch_players().await,
        }
    }

    async fn fetch_pool_history(
        &mut self,
        names: &[String],
        players: &[Player],
    ) -> Result<InMemoryHistory> {
        // resolve every name before any request goes out
        let registry = PlayerRegistry::new(players.to_vec())?;
        let pool = registry.select(names)?;

        let mut history = InMemoryHistory::new();
        for player in &pool {
            let records = self.source.fetch_match_history(player).await?;
            history.insert(&player.name, records);
        }
        Ok(history)
    }
}
