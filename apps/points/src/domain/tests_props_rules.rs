//! Property-based tests for scoring rules and the match aggregate.
//!
//! Increase cases locally with: PROPTEST_CASES=800 cargo test -p points

use std::env;

use proptest::prelude::*;

use crate::domain::match_state::MatchState;
use crate::domain::rules::{apply_point, RuleSet, TENNIS_FORTY};
use crate::domain::score::{Player, ScoreEvent, ScoreState};
use crate::domain::test_gens;
use crate::domain::test_state_helpers::singles;

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn undo_reverts_any_increment(
        sport in test_gens::sport(),
        prefix in test_gens::rally(60),
        scorer in test_gens::player(),
    ) {
        let mut state = MatchState::new(singles(sport));
        for p in prefix {
            state.increment(p);
        }
        let before = state.score();
        let depth = state.undo_depth();

        state.increment(scorer);
        prop_assert!(state.undo());
        prop_assert_eq!(state.score(), before);
        prop_assert_eq!(state.undo_depth(), depth);
    }

    #[test]
    fn sets_never_decrease_without_undo(
        rules in test_gens::rule_set(),
        start in test_gens::score_state(),
        seq in test_gens::rally(80),
    ) {
        let mut s = start;
        for p in seq {
            let (next, _) = apply_point(rules, s, p);
            prop_assert!(next.sets_p1 >= s.sets_p1);
            prop_assert!(next.sets_p2 >= s.sets_p2);
            s = next;
        }
    }

    #[test]
    fn game_won_resets_points_and_adds_one_set(
        rules in test_gens::rule_set(),
        start in test_gens::score_state(),
        scorer in test_gens::player(),
    ) {
        let (next, ev) = apply_point(rules, start, scorer);
        if let ScoreEvent::GameWon { winner } = ev {
            prop_assert_eq!(winner, scorer);
            prop_assert_eq!((next.points_p1, next.points_p2), (0, 0));
            prop_assert_eq!(next.sets(scorer), start.sets(scorer) + 1);
            prop_assert_eq!(next.sets(scorer.opponent()), start.sets(scorer.opponent()));
        }
    }

    #[test]
    fn tennis_deuce_never_awards_on_one_point_lead(
        seq in test_gens::rally(40),
        extra in 0u32..6,
    ) {
        // Start at deuce with both players well into the deuce zone.
        let mut s = ScoreState::new(TENNIS_FORTY + extra, TENNIS_FORTY + extra, 0, 0);
        for p in seq {
            let lead_before = s.points(p) as i64 - s.points(p.opponent()) as i64;
            let (next, ev) = apply_point(RuleSet::TennisLike, s, p);
            match ev {
                // Winning needs advantage first, i.e. the game ends two clear.
                ScoreEvent::GameWon { .. } => prop_assert_eq!(lead_before, 1),
                _ => {
                    let lead_after = next.points(p) as i64 - next.points(p.opponent()) as i64;
                    prop_assert!(lead_after <= 1);
                }
            }
            if matches!(ev, ScoreEvent::GameWon { .. }) {
                break;
            }
            s = next;
        }
    }

    #[test]
    fn rally_games_end_at_target_with_margin(
        target in 2u32..25,
        seq in test_gens::rally(200),
    ) {
        let rules = RuleSet::RallyPoint { target, margin: 2 };
        let mut s = ScoreState::default();
        for p in seq {
            let before = s;
            let (next, ev) = apply_point(rules, s, p);
            if let ScoreEvent::GameWon { winner } = ev {
                let mine = before.points(winner) + 1;
                let theirs = before.points(winner.opponent());
                prop_assert!(mine >= target);
                prop_assert!(mine >= theirs + 2);
            }
            s = next;
        }
    }

    #[test]
    fn tally_mode_never_moves_points(seq in test_gens::rally(50)) {
        let mut s = ScoreState::default();
        for p in &seq {
            s = apply_point(RuleSet::Tally, s, *p).0;
        }
        prop_assert_eq!((s.points_p1, s.points_p2), (0, 0));
        let ones = seq.iter().filter(|p| **p == Player::One).count() as u32;
        prop_assert_eq!(s.sets_p1, ones);
        prop_assert_eq!(s.sets_p2, seq.len() as u32 - ones);
    }
}
