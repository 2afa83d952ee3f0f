use std::collections::{HashMap, HashSet};

use crate::domain::models::Player;
use crate::errors::PairingError;

/// Players looked up by their unique display name
pub struct PlayerRegistry {
    players: Vec<Player>,
    by_name: HashMap<String, usize>,
}

impl PlayerRegistry {
    pub fn new(players: Vec<Player>) -> Result<Self, PairingError> {
        let mut by_name = HashMap::with_capacity(players.len());
        for (idx, player) in players.iter().enumerate() {
            if by_name.insert(player.name.clone(), idx).is_some() {
                return Err(PairingError::duplicate(&player.name));
            }
        }
        Ok(Self { players, by_name })
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.by_name.get(name).map(|&idx| &self.players[idx])
    }

    pub fn require(&self, name: &str) -> Result<&Player, PairingError> {
        self.get(name).ok_or_else(|| PairingError::not_found(name))
    }

    /// Resolve every name, failing on the first one that is missing.
    ///
    /// Names must be distinct. The result follows registry order, so the
    /// order of `names` never leaks into the selection.
    pub fn select(&self, names: &[String]) -> Result<Vec<Player>, PairingError> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(PairingError::duplicate(name));
            }
            self.require(name)?;
        }

        Ok(self
            .players
            .iter()
            .filter(|player| seen.contains(player.name.as_str()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PlayerRegistry {
        PlayerRegistry::new(vec![
            Player::new("1", "Henrik F.", 1500),
            Player::new("2", "Martin A.", 1400),
            Player::new("3", "Tomasz C.", 1300),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = PlayerRegistry::new(vec![
            Player::new("1", "Dave B.", 1000),
            Player::new("2", "Dave B.", 1100),
        ]);

        assert_eq!(result.err(), Some(PairingError::duplicate("Dave B.")));
    }

    #[test]
    fn test_select_follows_registry_order() {
        let names = vec!["Tomasz C.".to_string(), "Henrik F.".to_string()];
        let selected = registry().select(&names).unwrap();

        let selected_names: Vec<&str> = selected.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(selected_names, vec!["Henrik F.", "Tomasz C."]);
    }

    #[test]
    fn test_select_reports_missing_name() {
        let names = vec!["Henrik F.".to_string(), "Nobody".to_string()];
        let result = registry().select(&names);

        assert_eq!(result.err(), Some(PairingError::not_found("Nobody")));
    }

    #[test]
    fn test_select_rejects_repeated_name() {
        let names = vec!["Henrik F.".to_string(), "Henrik F.".to_string()];
        let result = registry().select(&names);

        assert_eq!(result.err(), Some(PairingError::duplicate("Henrik F.")));
    }
}
