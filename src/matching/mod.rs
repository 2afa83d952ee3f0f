pub mod roommates;

pub use roommates::StableRoommates;

use crate::domain::preference_map::{Pairing, PreferenceMap};
use crate::errors::PairingError;

/// Turns preference lists into one partner per player.
pub trait Matcher {
    fn pair(&self, preferences: &PreferenceMap) -> Result<Pairing, PairingError>;
}
