//! Match fixtures.

use points::domain::DEFAULT_AVATARS;
use points::{Match, MatchConfig, MatchState, MatchType, Player, ScoreState, Sport};
use time::OffsetDateTime;
use uuid::Uuid;

/// 1v1 config using the first two stock avatars.
pub fn singles(sport: Sport) -> MatchConfig {
    MatchConfig::builder(sport)
        .avatars(DEFAULT_AVATARS[..2].iter().copied())
        .build()
        .expect("singles fixture is valid")
}

/// 2v2 config using the first four stock avatars.
pub fn doubles(sport: Sport) -> MatchConfig {
    MatchConfig::builder(sport)
        .match_type(MatchType::TwoVsTwo)
        .avatars(DEFAULT_AVATARS[..4].iter().copied())
        .build()
        .expect("doubles fixture is valid")
}

/// Parse a rally like `"1121"`: each digit is the side that scored.
pub fn rally(spec: &str) -> Vec<Player> {
    spec.chars()
        .filter_map(|c| match c {
            '1' => Some(Player::One),
            '2' => Some(Player::Two),
            _ => None,
        })
        .collect()
}

/// Score every point of `spec` on `state`.
pub fn play(state: &mut MatchState, spec: &str) {
    for player in rally(spec) {
        state.increment(player);
    }
}

/// Archived match with a fixed timestamp.
pub fn archived(sport: Sport, sets: (u32, u32), at: OffsetDateTime) -> Match {
    Match::new(
        Uuid::new_v4(),
        sport,
        MatchType::OneVsOne,
        DEFAULT_AVATARS[..2].iter().map(|a| a.to_string()).collect(),
        ScoreState::new(0, 0, sets.0, sets.1),
        at,
    )
}
