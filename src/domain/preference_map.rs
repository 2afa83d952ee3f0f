use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Player name -> opponents, most preferred first.
///
/// Entries keep insertion order and so does each opponent list; both orders
/// survive a JSON round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceMap {
    entries: Vec<(String, Vec<String>)>,
}

impl PreferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, replacing the list if the player is already present.
    pub fn insert(&mut self, player: String, opponents: Vec<String>) {
        match self.entries.iter_mut().find(|(name, _)| *name == player) {
            Some(entry) => entry.1 = opponents,
            None => self.entries.push((player, opponents)),
        }
    }

    pub fn get(&self, player: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == player)
            .map(|(_, opponents)| opponents.as_slice())
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, opponents)| (name.as_str(), opponents.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PreferenceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, opponents) in &self.entries {
            map.serialize_entry(name, opponents)?;
        }
        map.end()
    }
}

struct PreferenceMapVisitor;

impl<'de> Visitor<'de> for PreferenceMapVisitor {
    type Value = PreferenceMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of player names to ordered opponent names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut preferences = PreferenceMap::new();
        while let Some((name, opponents)) = access.next_entry::<String, Vec<String>>()? {
            if preferences.get(&name).is_some() {
                return Err(de::Error::custom(format!("duplicate player \"{}\"", name)));
            }
            preferences.entries.push((name, opponents));
        }
        Ok(preferences)
    }
}

impl<'de> Deserialize<'de> for PreferenceMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PreferenceMapVisitor)
    }
}

/// Symmetric one-to-one assignment of partners
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pairing {
    partners: BTreeMap<String, String>,
}

impl Pairing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `a` and `b` as partners of each other.
    pub fn join(&mut self, a: &str, b: &str) {
        self.partners.insert(a.to_string(), b.to_string());
        self.partners.insert(b.to_string(), a.to_string());
    }

    pub fn partner_of(&self, player: &str) -> Option<&str> {
        self.partners.get(player).map(String::as_str)
    }

    /// Every pair once, ordered by the alphabetically first name.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.partners
            .iter()
            .filter(|(a, b)| a < b)
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}
