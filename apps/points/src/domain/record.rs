use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::match_config::MatchType;
use crate::domain::score::ScoreState;
use crate::domain::sport::Sport;

/// Archived result of one finished match.
///
/// `points_p1` / `points_p2` carry the final set tally, not rally points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub sport: Sport,
    pub points_p1: u32,
    pub points_p2: u32,
    pub match_type: MatchType,
    pub avatars: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<u64>,
}

impl Match {
    pub fn new(
        id: Uuid,
        sport: Sport,
        match_type: MatchType,
        avatars: Vec<String>,
        final_score: ScoreState,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            sport,
            points_p1: final_score.sets_p1,
            points_p2: final_score.sets_p2,
            match_type,
            avatars,
            timestamp,
            elapsed_secs: None,
        }
    }

    /// "2 - 1" style final tally.
    pub fn tally(&self) -> String {
        format!("{} - {}", self.points_p1, self.points_p2)
    }
}

/// Build a record with a fresh id, stamped now (UTC).
pub fn record(
    sport: Sport,
    match_type: MatchType,
    avatars: Vec<String>,
    final_score: ScoreState,
) -> Match {
    Match::new(
        Uuid::new_v4(),
        sport,
        match_type,
        avatars,
        final_score,
        OffsetDateTime::now_utc(),
    )
}
