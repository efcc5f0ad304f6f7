//! Persisted user preferences.

pub mod preferences;
pub mod store;

pub use preferences::Settings;
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
