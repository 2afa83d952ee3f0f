use anyhow::{Context, Result};
use log::info;
use scraper::Html;

use super::RankingsSource;
use super::parsers::{parse_match_history, RankingsParser};
use crate::config::ScraperSettings;
use crate::domain::models::{MatchRecord, Player};
use crate::errors::parse_context;
use crate::http::RateLimitedClient;

/// Reads rankings and match history from the ladder web site
pub struct RankingsScraper {
    client: RateLimitedClient,
    parser: RankingsParser,
    settings: ScraperSettings,
}

impl RankingsScraper {
    pub fn new(settings: ScraperSettings) -> Result<Self> {
        let client = RateLimitedClient::new(&settings)?;
        let parser = RankingsParser::new(settings.base_url)?;

        Ok(Self {
            client,
            parser,
            settings,
        })
    }

    async fn fetch_page(&mut self, url: &str) -> Result<Html> {
        let body = self.client.fetch_text(url).await?;
        Ok(Html::parse_document(&body))
    }
}

impl RankingsSource for RankingsScraper {
    async fn fetch_players(&mut self) -> Result<Vec<Player>> {
        let url = self.settings.rankings_url();
        info!("Fetching rankings from {}", url);

        let html = self.fetch_page(&url).await?;
        let players = self
            .parser
            .parse(&html)
            .with_context(|| parse_context("rankings page"))?;

        info!("  → Found {} ranked players", players.len());
        Ok(players)
    }

    async fn fetch_match_history(&mut self, player: &Player) -> Result<Vec<MatchRecord>> {
        let url = self.settings.matches_url(&player.id);
        info!("Fetching match history for {}", player.name);

        let html = self.fetch_page(&url).await?;
        let records = parse_match_history(&html, &player.name)
            .with_context(|| parse_context(&format!("match history of {}", player.name)))?;

        info!("  → {} matches listed", records.len());
        Ok(records)
    }
}
