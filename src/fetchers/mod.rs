pub mod parsers;
pub mod rankings_scraper;

pub use rankings_scraper::RankingsScraper;

use anyhow::Result;

use crate::domain::models::{MatchRecord, Player};

/// Where players and their past matches come from
#[allow(async_fn_in_trait)]
pub trait RankingsSource {
    async fn fetch_players(&mut self) -> Result<Vec<Player>>;

    /// The player's matches, most recent first
    async fn fetch_match_history(&mut self, player: &Player) -> Result<Vec<MatchRecord>>;
}
