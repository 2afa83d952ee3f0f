pub mod pairing;
pub mod scrape;

pub use pairing::{pair_players, PairingService, PoolRequest};
pub use scrape::ScrapeService;
