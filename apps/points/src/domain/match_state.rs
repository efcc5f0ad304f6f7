use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::match_config::MatchConfig;
use crate::domain::record::{record, Match};
use crate::domain::rules::{apply_point, display_points, in_deuce_phase, RuleSet};
use crate::domain::score::{Player, ScoreEvent, ScoreState};
use crate::domain::sport::Sport;
use crate::errors::domain::DomainError;

/// Match lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Config chosen, scores at zero.
    Setup,
    /// Scoring loop: increment / decrement / undo.
    Active,
    /// Terminal. A new match needs a new `MatchState`.
    Finished,
}

/// Snapshot of the score taken before a mutating action.
pub type UndoEntry = ScoreState;

/// Live match aggregate.
///
/// Owns the score and the undo stack for exactly one match. Every mutating
/// call pushes the pre-action score before changing it, inside the same
/// `&mut self` borrow, so the stack and the score can never disagree.
#[derive(Debug, Clone)]
pub struct MatchState {
    config: MatchConfig,
    rules: RuleSet,
    phase: Phase,
    score: ScoreState,
    undo_stack: Vec<UndoEntry>,
}

/// Read model handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    pub sport: Sport,
    pub phase: Phase,
    pub score: ScoreState,
    pub display_p1: String,
    pub display_p2: String,
    pub deuce: bool,
    pub can_undo: bool,
    pub avatars: Vec<String>,
}

impl MatchState {
    pub fn new(config: MatchConfig) -> Self {
        let rules = RuleSet::for_config(&config);
        Self {
            config,
            rules,
            phase: Phase::Setup,
            score: ScoreState::default(),
            undo_stack: Vec::new(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Score a point for `player`.
    pub fn increment(&mut self, player: Player) -> ScoreEvent {
        if self.phase == Phase::Finished {
            warn!(?player, "increment after finish ignored");
            return ScoreEvent::Ignored;
        }
        self.phase = Phase::Active;
        self.undo_stack.push(self.score);

        let (next, event) = apply_point(self.rules, self.score, player);
        self.score = next;

        debug!(
            sport = %self.config.sport(),
            ?event,
            p1 = next.points_p1,
            p2 = next.points_p2,
            sets_p1 = next.sets_p1,
            sets_p2 = next.sets_p2,
            "point applied"
        );
        event
    }

    /// Take a point back from `player`. Returns whether anything changed.
    ///
    /// Only rally-point sports have a plain point counter; tennis rungs and
    /// tally sets are left alone.
    pub fn decrement(&mut self, player: Player) -> bool {
        if self.phase == Phase::Finished
            || !self.rules.supports_decrement()
            || self.score.points(player) == 0
        {
            return false;
        }
        self.phase = Phase::Active;
        self.undo_stack.push(self.score);
        *self.score.points_mut(player) -= 1;
        true
    }

    /// Restore the score from before the last action. No-op when nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.phase == Phase::Finished {
            return false;
        }
        match self.undo_stack.pop() {
            Some(previous) => {
                self.score = previous;
                true
            }
            None => false,
        }
    }

    /// Drop all progress without producing a record.
    pub fn reset(&mut self) {
        if self.phase == Phase::Finished {
            warn!("reset after finish ignored");
            return;
        }
        self.score = ScoreState::default();
        self.undo_stack.clear();
        self.phase = Phase::Setup;
    }

    /// End the match and produce its history record.
    ///
    /// Only completed sets count; points in progress are discarded.
    pub fn finish(&mut self) -> Result<Match, DomainError> {
        self.finish_inner(None)
    }

    /// Like [`MatchState::finish`], stamping the match duration.
    pub fn finish_with_elapsed(&mut self, elapsed_secs: u64) -> Result<Match, DomainError> {
        self.finish_inner(Some(elapsed_secs))
    }

    fn finish_inner(&mut self, elapsed_secs: Option<u64>) -> Result<Match, DomainError> {
        if self.phase == Phase::Finished {
            return Err(DomainError::PhaseMismatch {
                expected: Phase::Active,
                actual: Phase::Finished,
            });
        }

        let mut finished = record(
            self.config.sport(),
            self.config.match_type(),
            self.config.avatars().to_vec(),
            self.score,
        );
        finished.elapsed_secs = elapsed_secs;

        self.score = ScoreState::default();
        self.undo_stack.clear();
        self.phase = Phase::Finished;
        Ok(finished)
    }

    /// Fresh match with the same setup.
    pub fn rematch(&self) -> MatchState {
        MatchState::new(self.config.clone())
    }

    pub fn display(&self, player: Player) -> String {
        display_points(self.rules, &self.score, player)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            sport: self.config.sport(),
            phase: self.phase,
            score: self.score,
            display_p1: self.display(Player::One),
            display_p2: self.display(Player::Two),
            deuce: in_deuce_phase(self.rules, &self.score),
            can_undo: self.can_undo(),
            avatars: self.config.avatars().to_vec(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_score(config: MatchConfig, score: ScoreState) -> Self {
        let mut state = Self::new(config);
        state.score = score;
        state.phase = Phase::Active;
        state
    }
}
