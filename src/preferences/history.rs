use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::clock::{age_in_days, Clock};
use crate::domain::models::{MatchRecord, Player};

/// Read-only view of match records already loaded into memory.
///
/// Records come back most recent first.
pub trait MatchHistorySource {
    fn records_for(&self, player: &Player) -> &[MatchRecord];
}

/// Match records keyed by player name
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    records: HashMap<String, Vec<MatchRecord>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player_name: &str, records: Vec<MatchRecord>) {
        self.records.insert(player_name.to_string(), records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MatchHistorySource for InMemoryHistory {
    fn records_for(&self, player: &Player) -> &[MatchRecord] {
        self.records
            .get(&player.name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Dates of recent matches against each opponent of one player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentHistoryIndex {
    dates_by_opponent: HashMap<String, Vec<NaiveDate>>,
}

impl OpponentHistoryIndex {
    /// Collect records younger than `window_days`.
    ///
    /// Records are chronological, so the scan stops at the first one whose
    /// age reaches the window.
    pub fn build(records: &[MatchRecord], window_days: i64, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let mut dates_by_opponent: HashMap<String, Vec<NaiveDate>> = HashMap::new();

        for record in records {
            if age_in_days(record.date, today) >= window_days {
                break;
            }
            dates_by_opponent
                .entry(record.opponent_name.clone())
                .or_default()
                .push(record.date);
        }

        Self { dates_by_opponent }
    }

    pub fn dates_against(&self, opponent_name: &str) -> &[NaiveDate] {
        self.dates_by_opponent
            .get(opponent_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn opponent_count(&self) -> usize {
        self.dates_by_opponent.len()
    }
}
