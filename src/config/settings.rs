use crate::rating::Rating;
use crate::rating::normalization::{DEFAULT_BASE, DEFAULT_STEP};

#[derive(Debug, Clone)]
pub struct PreferenceSettings {
    pub match_history_days: i64,
    pub normalized_base: Rating,
    pub normalized_step: Rating,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            match_history_days: 90,
            normalized_base: DEFAULT_BASE,
            normalized_step: DEFAULT_STEP,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub base_url: &'static str,
    pub rankings_path: &'static str,
    pub matches_path: &'static str,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 500,
            user_agent: "TennisPairing/1.0",
            timeout_secs: 30,
            base_url: "https://www.luckylosertennis.com",
            rankings_path: "/ATL/ATLstegen/public/rankings/view",
            matches_path: "/ATL/ATLstegen/public/players/matches",
        }
    }
}

impl ScraperSettings {
    pub fn rankings_url(&self) -> String {
        format!("{}{}", self.base_url, self.rankings_path)
    }

    /// First page of a player's match list, newest first
    pub fn matches_url(&self, player_id: &str) -> String {
        format!("{}{}/{}/1", self.base_url, self.matches_path, player_id)
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub players_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            players_path: std::env::var("PLAYERS_PATH")
                .unwrap_or_else(|_| "players.json".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub preferences: PreferenceSettings,
    pub scraper: ScraperSettings,
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            preferences: PreferenceSettings::default(),
            scraper: ScraperSettings::default(),
            store: StoreSettings::default(),
        }
    }
}
