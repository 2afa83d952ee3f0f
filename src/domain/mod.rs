pub mod clock;
pub mod models;
pub mod preference_map;
pub mod registry;

pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{MatchRecord, Player, PlayerSnapshot};
pub use preference_map::{Pairing, PreferenceMap};
pub use registry::PlayerRegistry;
