use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use super::Matcher;
use crate::domain::preference_map::{Pairing, PreferenceMap};
use crate::errors::PairingError;

/// Irving's stable roommates algorithm.
///
/// Lists are reduced in place: removing `b` from `a`'s list always removes `a`
/// from `b`'s list too.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableRoommates;

impl Matcher for StableRoommates {
    fn pair(&self, preferences: &PreferenceMap) -> Result<Pairing, PairingError> {
        let mut table = PreferenceTable::from_map(preferences)?;
        if table.size() % 2 != 0 {
            return Err(PairingError::UnevenPool { size: table.size() });
        }

        table.propose()?;
        table.eliminate_rotations()?;
        table.into_pairing()
    }
}

struct PreferenceTable {
    names: Vec<String>,
    lists: Vec<Vec<usize>>,
    rank: Vec<HashMap<usize, usize>>,
}

impl PreferenceTable {
    fn from_map(preferences: &PreferenceMap) -> Result<Self, PairingError> {
        let names: Vec<String> = preferences.players().map(str::to_string).collect();
        let index: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();

        let mut lists = Vec::with_capacity(names.len());
        for (name, opponents) in preferences.iter() {
            lists.push(Self::resolve_list(name, opponents, &index)?);
        }

        let rank = lists
            .iter()
            .map(|list| {
                list.iter()
                    .enumerate()
                    .map(|(pos, &other)| (other, pos))
                    .collect::<HashMap<usize, usize>>()
            })
            .collect();

        let mut table = Self { names, lists, rank };
        table.drop_one_sided_entries();
        Ok(table)
    }

    fn resolve_list(
        name: &str,
        opponents: &[String],
        index: &HashMap<&str, usize>,
    ) -> Result<Vec<usize>, PairingError> {
        let mut seen = HashSet::new();
        let mut list = Vec::with_capacity(opponents.len());
        for opponent in opponents {
            if opponent == name {
                return Err(invalid(name, "lists the player itself"));
            }
            let &idx = index
                .get(opponent.as_str())
                .ok_or_else(|| PairingError::not_found(opponent))?;
            if !seen.insert(idx) {
                return Err(invalid(name, &format!("lists \"{}\" twice", opponent)));
            }
            list.push(idx);
        }
        Ok(list)
    }

    // a pair is only acceptable when both sides list each other
    fn drop_one_sided_entries(&mut self) {
        let rank = &self.rank;
        for (player, list) in self.lists.iter_mut().enumerate() {
            list.retain(|other| rank[*other].contains_key(&player));
        }
    }

    fn size(&self) -> usize {
        self.names.len()
    }

    /// Phase 1: everyone proposes down their list until held.
    fn propose(&mut self) -> Result<(), PairingError> {
        let mut free: VecDeque<usize> = (0..self.size()).collect();
        let mut holder: Vec<Option<usize>> = vec![None; self.size()];

        while let Some(proposer) = free.pop_front() {
            let &target = self.lists[proposer]
                .first()
                .ok_or(PairingError::NoStableMatching)?;

            // every entry left on the target's list beats its current holder
            if let Some(rejected) = holder[target].replace(proposer) {
                free.push_back(rejected);
            }
            self.truncate_after(target, proposer);
        }
        Ok(())
    }

    /// Phase 2: remove rotations until every list has one entry.
    fn eliminate_rotations(&mut self) -> Result<(), PairingError> {
        while let Some(start) = self.first_open_list() {
            let rotation = self.find_rotation(start)?;
            debug!("Eliminating rotation of length {}", rotation.len());

            let moves: Vec<(usize, usize)> = rotation
                .iter()
                .map(|&p| (p, self.lists[p][1]))
                .collect();
            for (proposer, next_choice) in moves {
                self.truncate_after(next_choice, proposer);
            }

            if self.lists.iter().any(Vec::is_empty) {
                return Err(PairingError::NoStableMatching);
            }
        }
        Ok(())
    }

    fn first_open_list(&self) -> Option<usize> {
        self.lists.iter().position(|list| list.len() > 1)
    }

    fn find_rotation(&self, start: usize) -> Result<Vec<usize>, PairingError> {
        let mut sequence = vec![start];
        let mut position: HashMap<usize, usize> = HashMap::from([(start, 0)]);
        let mut current = start;

        loop {
            let second = *self.lists[current]
                .get(1)
                .ok_or(PairingError::NoStableMatching)?;
            let next = *self.lists[second]
                .last()
                .ok_or(PairingError::NoStableMatching)?;

            if let Some(&cycle_start) = position.get(&next) {
                return Ok(sequence.split_off(cycle_start));
            }
            position.insert(next, sequence.len());
            sequence.push(next);
            current = next;
        }
    }

    /// Drop everyone `player` ranks below `keep`, on both sides.
    fn truncate_after(&mut self, player: usize, keep: usize) {
        let Some(pos) = self.lists[player].iter().position(|&p| p == keep) else {
            return;
        };
        let removed = self.lists[player].split_off(pos + 1);
        for other in removed {
            self.lists[other].retain(|&p| p != player);
        }
    }

    fn into_pairing(self) -> Result<Pairing, PairingError> {
        let mut pairing = Pairing::new();
        for (player, list) in self.lists.iter().enumerate() {
            let &partner = list.first().ok_or(PairingError::NoStableMatching)?;
            if self.lists[partner].first() != Some(&player) {
                return Err(PairingError::NoStableMatching);
            }
            pairing.join(&self.names[player], &self.names[partner]);
        }
        Ok(pairing)
    }
}

fn invalid(name: &str, reason: &str) -> PairingError {
    PairingError::InvalidPreferences {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences(entries: &[(&str, &[&str])]) -> PreferenceMap {
        let mut map = PreferenceMap::new();
        for (name, opponents) in entries {
            map.insert(
                name.to_string(),
                opponents.iter().map(|s| s.to_string()).collect(),
            );
        }
        map
    }

    fn assert_stable(map: &PreferenceMap, pairing: &Pairing) {
        let rank_of = |player: &str, other: &str| {
            map.get(player)
                .and_then(|list| list.iter().position(|o| o == other))
                .unwrap()
        };
        for (a, list) in map.iter() {
            let partner_a = pairing.partner_of(a).unwrap();
            for b in list {
                let partner_b = pairing.partner_of(b).unwrap();
                let a_prefers_b = rank_of(a, b) < rank_of(a, partner_a);
                let b_prefers_a = rank_of(b, a) < rank_of(b, partner_b);
                assert!(!(a_prefers_b && b_prefers_a), "{} and {} block", a, b);
            }
        }
    }

    #[test]
    fn test_identical_preferences() {
        let map = preferences(&[
            ("a", &["b", "c", "d"]),
            ("b", &["a", "c", "d"]),
            ("c", &["a", "b", "d"]),
            ("d", &["a", "b", "c"]),
        ]);

        let pairing = StableRoommates.pair(&map).unwrap();

        assert_eq!(pairing.pairs(), vec![("a", "b"), ("c", "d")]);
    }

    #[test]
    fn test_six_players_needing_rotations() {
        let map = preferences(&[
            ("1", &["3", "4", "2", "6", "5"]),
            ("2", &["6", "5", "4", "1", "3"]),
            ("3", &["2", "4", "5", "1", "6"]),
            ("4", &["5", "2", "3", "6", "1"]),
            ("5", &["3", "1", "2", "4", "6"]),
            ("6", &["5", "1", "3", "4", "2"]),
        ]);

        let pairing = StableRoommates.pair(&map).unwrap();

        assert_eq!(pairing.len(), 6);
        assert_eq!(pairing.pairs(), vec![("1", "6"), ("2", "4"), ("3", "5")]);
        assert_stable(&map, &pairing);
    }

    #[test]
    fn test_no_stable_matching() {
        // a, b, c each rank d last; whoever gets d would rather switch
        let map = preferences(&[
            ("a", &["b", "c", "d"]),
            ("b", &["c", "a", "d"]),
            ("c", &["a", "b", "d"]),
            ("d", &["a", "b", "c"]),
        ]);

        assert_eq!(StableRoommates.pair(&map), Err(PairingError::NoStableMatching));
    }

    #[test]
    fn test_odd_pool_fails() {
        let map = preferences(&[("a", &["b", "c"]), ("b", &["a", "c"]), ("c", &["a", "b"])]);

        assert_eq!(
            StableRoommates.pair(&map),
            Err(PairingError::UnevenPool { size: 3 })
        );
    }

    #[test]
    fn test_unknown_opponent_fails() {
        let map = preferences(&[("a", &["b"]), ("b", &["z"])]);

        assert_eq!(StableRoommates.pair(&map), Err(PairingError::not_found("z")));
    }

    #[test]
    fn test_self_reference_fails() {
        let map = preferences(&[("a", &["a", "b"]), ("b", &["a"])]);

        assert!(matches!(
            StableRoommates.pair(&map),
            Err(PairingError::InvalidPreferences { .. })
        ));
    }

    #[test]
    fn test_empty_map_pairs_nobody() {
        let pairing = StableRoommates.pair(&PreferenceMap::new()).unwrap();
        assert!(pairing.is_empty());
    }
}
