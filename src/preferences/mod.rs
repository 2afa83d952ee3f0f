pub mod builder;
pub mod history;
pub mod strategy;

pub use builder::PreferenceBuilder;
pub use history::{InMemoryHistory, MatchHistorySource, OpponentHistoryIndex};
pub use strategy::{NormalizedStrategy, PreferenceStrategy};
