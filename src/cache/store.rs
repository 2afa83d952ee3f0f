use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::models::{Player, PlayerSnapshot};
use crate::errors::{parse_context, store_context};

/// Pretty-printed JSON files: player snapshots, pools, preferences, pairings
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStore;

impl JsonStore {
    pub fn new() -> Self {
        Self
    }

    pub fn save<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        self.ensure_parent_dir(path)?;
        fs::write(path, json).with_context(|| store_context("write", &path.display().to_string()))?;

        info!("Saved {}", path.display());
        Ok(())
    }

    pub fn load<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<T> {
        let json = fs::read_to_string(path)
            .with_context(|| store_context("read", &path.display().to_string()))?;

        serde_json::from_str(&json).with_context(|| {
            parse_context(&format!(
                "{}. First 200 chars: {}",
                path.display(),
                json.chars().take(200).collect::<String>()
            ))
        })
    }

    pub fn save_players(&self, path: &Path, players: &[Player]) -> Result<()> {
        let snapshot = PlayerSnapshot {
            players: players.to_vec(),
        };
        self.save(path, &snapshot)
    }

    pub fn load_players(&self, path: &Path) -> Result<Vec<Player>> {
        let snapshot: PlayerSnapshot = self.load(path)?;
        info!("Loaded {} players from {}", snapshot.players.len(), path.display());
        Ok(snapshot.players)
    }

    fn ensure_parent_dir(&self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .with_context(|| store_context("create directory for", &path.display().to_string())),
            _ => Ok(()),
        }
    }
}
