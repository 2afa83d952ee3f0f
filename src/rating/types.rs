pub type Rating = i32;
pub type Weight = i64;

/// Weighed candidate for one reference player's preference list.
///
/// A weight is only comparable with weights computed for the same reference
/// player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    pub name: String,
    pub weight: Weight,
}

impl Opponent {
    pub fn new(name: &str, weight: Weight) -> Self {
        Self {
            name: name.to_string(),
            weight,
        }
    }
}
