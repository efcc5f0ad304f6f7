#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Score-tracking core: per-sport scoring rules, the live match state
//! machine with undo, the match timer, and the bounded match history.

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod settings;
pub mod state;

// Re-exports for public API
pub use config::app::AppConfig;
pub use domain::{
    DayGroup, Match, MatchConfig, MatchHistory, MatchSnapshot, MatchState, MatchType, Phase,
    Player, RuleSet, ScoreEvent, ScoreState, Sport,
};
pub use error::AppError;
pub use errors::DomainError;
pub use services::{MatchRecorder, MatchTimer};
pub use settings::{JsonFileStore, MemoryStore, Settings, SettingsStore};
pub use state::session::{build_session, SessionBuilder, SessionState, SharedHistory};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    points_test_support::logging::init();
}
