//! In-memory match simulator.
//!
//! Plays randomised rallies through the real `MatchState`, including the
//! occasional mis-tap that gets undone, and archives each finished match
//! through the session's recorder.

use points::{
    AppError, Match, MatchConfig, MatchType, Player, RuleSet, ScoreEvent, SessionState, Sport,
};
use points::domain::DEFAULT_AVATARS;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Safety valve against a pathological deuce that never ends.
const MAX_ACTIONS: u32 = 5_000;

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub sport: Sport,
    pub doubles: bool,
    pub uses_sets: bool,
    pub custom_target: u32,
    /// Sets (games) a side needs to win the match.
    pub sets_to_win: u32,
    /// Actions per match in tally mode.
    pub tally_length: u32,
    /// Probability that player one wins a rally.
    pub p1_strength: f64,
    /// Probability that a tap is a mistake and gets undone.
    pub undo_rate: f64,
}

#[derive(Debug, Clone)]
pub struct GameResult {
    pub record: Match,
    pub rallies: u32,
    pub undos: u32,
    pub games: u32,
}

pub struct Simulator {
    rng: StdRng,
    config: SimConfig,
}

impl Simulator {
    pub fn new(seed: u64, config: SimConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    fn match_config(&mut self) -> Result<MatchConfig, AppError> {
        let match_type = if self.config.doubles {
            MatchType::TwoVsTwo
        } else {
            MatchType::OneVsOne
        };
        let mut avatars: Vec<&str> = DEFAULT_AVATARS.to_vec();
        avatars.shuffle(&mut self.rng);
        avatars.truncate(match_type.avatar_count());

        Ok(MatchConfig::builder(self.config.sport)
            .match_type(match_type)
            .avatars(avatars)
            .uses_sets(self.config.uses_sets)
            .custom_target_points(self.config.custom_target)
            .build()?)
    }

    fn rally_winner(&mut self) -> Player {
        if self.rng.random_bool(self.config.p1_strength) {
            Player::One
        } else {
            Player::Two
        }
    }

    fn decided(&self, rules: RuleSet, actions: u32, sets: (u32, u32)) -> bool {
        match rules {
            RuleSet::Tally => actions >= self.config.tally_length,
            _ => sets.0 >= self.config.sets_to_win || sets.1 >= self.config.sets_to_win,
        }
    }

    /// Play one match to completion and archive it.
    pub fn simulate_match(&mut self, session: &SessionState) -> Result<GameResult, AppError> {
        let config = self.match_config()?;
        let mut state = session.new_match(config);
        let mut timer = session.new_timer();
        let rules = state.rules();

        let (mut actions, mut rallies, mut undos, mut games) = (0u32, 0u32, 0u32, 0u32);
        while !self.decided(rules, actions, (state.score().sets_p1, state.score().sets_p2))
            && actions < MAX_ACTIONS
        {
            actions += 1;

            // Rallies take 5 to 40 seconds of match clock.
            for _ in 0..self.rng.random_range(5..=40) {
                timer.tick();
            }

            if self.rng.random_bool(self.config.undo_rate) {
                let wrong = self.rally_winner().opponent();
                state.increment(wrong);
                state.undo();
                undos += 1;
            }

            rallies += 1;
            let scorer = self.rally_winner();
            if let ScoreEvent::GameWon { winner } = state.increment(scorer) {
                games += 1;
                debug!(?winner, sets = ?state.score(), "game won");
            }
        }

        let record = session.recorder().archive_timed(&mut state, &mut timer)?;
        Ok(GameResult {
            record,
            rallies,
            undos,
            games,
        })
    }
}
