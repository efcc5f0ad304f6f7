//! Domain layer: pure scoring logic types and helpers.

pub mod history;
pub mod match_config;
pub mod match_state;
pub mod record;
pub mod rules;
pub mod score;
pub mod sport;

#[cfg(test)]
mod tests_history;
#[cfg(test)]
mod tests_match_state;
#[cfg(test)]
mod tests_props_rules;

// Re-exports for ergonomics
pub use history::{DayGroup, MatchHistory, DEFAULT_HISTORY_CAPACITY};
pub use match_config::{MatchConfig, MatchConfigBuilder, MatchType, DEFAULT_AVATARS};
pub use match_state::{MatchSnapshot, MatchState, Phase, UndoEntry};
pub use record::{record, Match};
pub use rules::{apply_point, display_points, RuleSet};
pub use score::{Player, ScoreEvent, ScoreState};
pub use sport::{Sport, SPORT_CATALOGUE};
