use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rating::types::Rating;

/// Ranked ladder player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(alias = "elo_points")]
    pub rating: Rating,
}

impl Player {
    pub fn new(id: &str, name: &str, rating: Rating) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            url: String::new(),
            rating,
        }
    }

    /// Same identity with a different rating
    pub fn with_rating(&self, rating: Rating) -> Self {
        Self {
            rating,
            ..self.clone()
        }
    }
}

/// One past match, seen from one player's side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub opponent_name: String,
}

impl MatchRecord {
    pub fn new(date: NaiveDate, opponent_name: &str) -> Self {
        Self {
            date,
            opponent_name: opponent_name.to_string(),
        }
    }
}

/// On-disk shape of the scraped rankings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub players: Vec<Player>,
}
