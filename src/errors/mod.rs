use thiserror::Error;

/// Failures of the preference and matching core.
///
/// A missing or duplicated player is a data-consistency fault, so every
/// variant aborts the whole computation instead of yielding a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("No player found named \"{name}\"")]
    NotFound { name: String },

    #[error("Player pool is empty")]
    EmptyPool,

    #[error("Player \"{name}\" appears more than once")]
    DuplicatePlayer { name: String },

    #[error("Cannot pair an odd number of players ({size})")]
    UnevenPool { size: usize },

    #[error("No stable matching exists for these preferences")]
    NoStableMatching,

    #[error("Normalized rating for rank {rank} does not fit (base {base}, step {step})")]
    RatingOverflow { base: i32, step: i32, rank: usize },

    #[error("Invalid preference list for \"{name}\": {reason}")]
    InvalidPreferences { name: String, reason: String },
}

impl PairingError {
    pub fn not_found(name: &str) -> Self {
        PairingError::NotFound {
            name: name.to_string(),
        }
    }

    pub fn duplicate(name: &str) -> Self {
        PairingError::DuplicatePlayer {
            name: name.to_string(),
        }
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to store errors
pub fn store_context(operation: &str, path: &str) -> String {
    format!("Failed to {} file: {}", operation, path)
}
