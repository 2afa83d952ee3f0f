use anyhow::Result;
use log::info;
use std::path::Path;

use crate::cache::JsonStore;
use crate::fetchers::RankingsSource;

/// Snapshots the ladder rankings to a JSON file
pub struct ScrapeService<S: RankingsSource> {
    source: S,
    store: JsonStore,
}

impl<S: RankingsSource> ScrapeService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: JsonStore::new(),
        }
    }

    pub async fn run(&mut self, output: &Path) -> Result<usize> {
        info!("=== Scraping Rankings ===");

        let players = self.source.fetch_players().await?;
        if players.is_empty() {
            anyhow::bail!("Rankings page listed no players");
        }

        self.store.save_players(output, &players)?;
        info!("=== Saved {} players to {} ===", players.len(), output.display());
        Ok(players.len())
    }
}
