pub mod normalization;
pub mod types;
pub mod weighting;

pub use normalization::RatingNormalizer;
pub use types::{Opponent, Rating, Weight};
pub use weighting::{calculate_weight, RecencyBandedWeight, WeightPolicy};
