pub mod settings;

pub use settings::{AppConfig, PreferenceSettings, ScraperSettings, StoreSettings};
