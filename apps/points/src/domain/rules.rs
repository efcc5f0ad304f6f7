//! Sport-specific scoring rules.
//!
//! Every sport maps to one `RuleSet`; the match aggregate only ever talks to
//! the rule set, so adding a sport means one `Sport` variant plus one arm in
//! `RuleSet::for_config`.

use serde::{Deserialize, Serialize};

use crate::domain::match_config::MatchConfig;
use crate::domain::score::{Player, ScoreEvent, ScoreState};
use crate::domain::sport::Sport;

/// Rung at which tennis enters the 40 / deuce zone.
pub const TENNIS_FORTY: u32 = 3;

/// Badminton plays to 21.
pub const BADMINTON_TARGET: u32 = 21;
/// Squash and ping pong play to 11.
pub const SHORT_RALLY_TARGET: u32 = 11;
/// Lead required to close out a rally-point game.
pub const RALLY_WIN_MARGIN: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSet {
    /// 0 / 15 / 30 / 40, deuce and advantage.
    TennisLike,
    /// Every rally scores; game at `target` with a `margin` lead.
    RallyPoint { target: u32, margin: u32 },
    /// No point phase: every action is a set.
    Tally,
}

impl RuleSet {
    /// Rule set for a sport with default options.
    pub fn for_sport(sport: Sport) -> RuleSet {
        match sport {
            Sport::Tennis | Sport::Padel => RuleSet::TennisLike,
            Sport::Badminton => RuleSet::rally(BADMINTON_TARGET),
            Sport::Squash | Sport::PingPong => RuleSet::rally(SHORT_RALLY_TARGET),
            Sport::Custom => {
                RuleSet::rally(crate::domain::match_config::DEFAULT_CUSTOM_TARGET)
            }
            Sport::Football | Sport::Generic => RuleSet::Tally,
        }
    }

    /// Rule set for a configured match; honours the custom-sport options.
    pub fn for_config(config: &MatchConfig) -> RuleSet {
        match config.sport() {
            Sport::Custom if config.uses_sets() => RuleSet::rally(config.custom_target_points()),
            Sport::Custom => RuleSet::Tally,
            sport => RuleSet::for_sport(sport),
        }
    }

    const fn rally(target: u32) -> RuleSet {
        RuleSet::RallyPoint {
            target,
            margin: RALLY_WIN_MARGIN,
        }
    }

    /// Decrement only makes sense where points are a plain counter.
    pub const fn supports_decrement(self) -> bool {
        matches!(self, RuleSet::RallyPoint { .. })
    }

    pub const fn has_point_phase(self) -> bool {
        !matches!(self, RuleSet::Tally)
    }
}

/// Apply one scored point to `state`.
pub fn apply_point(rules: RuleSet, state: ScoreState, scorer: Player) -> (ScoreState, ScoreEvent) {
    let mut next = state;
    let event = match rules {
        RuleSet::TennisLike => apply_tennis_point(&mut next, scorer),
        RuleSet::RallyPoint { target, margin } => {
            apply_rally_point(&mut next, scorer, target, margin)
        }
        RuleSet::Tally => {
            *next.sets_mut(scorer) += 1;
            ScoreEvent::Tally { scorer }
        }
    };
    (next, event)
}

fn apply_tennis_point(state: &mut ScoreState, scorer: Player) -> ScoreEvent {
    let mine = state.points(scorer);
    let theirs = state.points(scorer.opponent());

    let wins = if mine >= TENNIS_FORTY && theirs >= TENNIS_FORTY {
        // Deuce zone: only a player already on advantage closes the game.
        mine > theirs
    } else {
        mine == TENNIS_FORTY && theirs < TENNIS_FORTY
    };

    if wins {
        state.award_game(scorer);
        ScoreEvent::GameWon { winner: scorer }
    } else {
        *state.points_mut(scorer) += 1;
        ScoreEvent::Point { scorer }
    }
}

fn apply_rally_point(state: &mut ScoreState, scorer: Player, target: u32, margin: u32) -> ScoreEvent {
    *state.points_mut(scorer) += 1;
    let mine = state.points(scorer);
    let theirs = state.points(scorer.opponent());

    if mine >= target && mine >= theirs + margin {
        state.award_game(scorer);
        ScoreEvent::GameWon { winner: scorer }
    } else {
        ScoreEvent::Point { scorer }
    }
}

/// True once both tennis players reached 40.
pub fn in_deuce_phase(rules: RuleSet, state: &ScoreState) -> bool {
    rules == RuleSet::TennisLike
        && state.points_p1 >= TENNIS_FORTY
        && state.points_p2 >= TENNIS_FORTY
}

/// Scoreboard label for one side's points.
pub fn display_points(rules: RuleSet, state: &ScoreState, player: Player) -> String {
    match rules {
        RuleSet::TennisLike => tennis_label(state, player).to_string(),
        RuleSet::RallyPoint { .. } => state.points(player).to_string(),
        RuleSet::Tally => state.sets(player).to_string(),
    }
}

fn tennis_label(state: &ScoreState, player: Player) -> &'static str {
    match state.points(player) {
        0 => "0",
        1 => "15",
        2 => "30",
        3 => "40",
        _ if in_deuce_phase(RuleSet::TennisLike, state) => {
            match state.points_p1.cmp(&state.points_p2) {
                std::cmp::Ordering::Equal => "D",
                std::cmp::Ordering::Greater => "A1",
                std::cmp::Ordering::Less => "A2",
            }
        }
        _ => "Game",
    }
}
