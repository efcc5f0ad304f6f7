use crate::domain::match_state::{MatchState, Phase};
use crate::domain::score::{Player, ScoreEvent, ScoreState};
use crate::domain::sport::Sport;
use crate::domain::test_state_helpers::{custom, play, singles, state_at};
use crate::errors::domain::DomainError;

#[test]
fn new_match_starts_in_setup() {
    let state = MatchState::new(singles(Sport::Tennis));
    assert_eq!(state.phase(), Phase::Setup);
    assert_eq!(state.score(), ScoreState::default());
    assert!(!state.can_undo());
}

#[test]
fn first_point_activates_match() {
    let mut state = MatchState::new(singles(Sport::Squash));
    state.increment(Player::Two);
    assert_eq!(state.phase(), Phase::Active);
    assert_eq!(state.score(), ScoreState::new(0, 1, 0, 0));
    assert!(state.can_undo());
}

#[test]
fn tennis_game_through_match_state() {
    let mut state = MatchState::new(singles(Sport::Tennis));
    play(&mut state, &[1, 1, 1]);
    assert_eq!(state.display(Player::One), "40");
    assert_eq!(state.increment(Player::One), ScoreEvent::GameWon { winner: Player::One });
    assert_eq!(state.score(), ScoreState::new(0, 0, 1, 0));
}

#[test]
fn undo_restores_across_game_boundary() {
    let mut state = state_at(Sport::Badminton, ScoreState::new(20, 19, 0, 0));
    state.increment(Player::One);
    assert_eq!(state.score(), ScoreState::new(0, 0, 1, 0));

    assert!(state.undo());
    assert_eq!(state.score(), ScoreState::new(20, 19, 0, 0));
}

#[test]
fn undo_on_empty_stack_is_noop() {
    let mut state = MatchState::new(singles(Sport::Padel));
    assert!(!state.undo());
    assert_eq!(state.score(), ScoreState::default());
}

#[test]
fn undo_unwinds_in_lifo_order() {
    let mut state = MatchState::new(singles(Sport::PingPong));
    play(&mut state, &[1, 2, 2]);
    assert_eq!(state.undo_depth(), 3);

    state.undo();
    assert_eq!(state.score(), ScoreState::new(1, 1, 0, 0));
    state.undo();
    assert_eq!(state.score(), ScoreState::new(1, 0, 0, 0));
    state.undo();
    assert_eq!(state.score(), ScoreState::default());
    assert!(!state.can_undo());
}

#[test]
fn decrement_rally_points() {
    let mut state = MatchState::new(singles(Sport::Badminton));
    play(&mut state, &[1, 1]);
    assert!(state.decrement(Player::One));
    assert_eq!(state.score(), ScoreState::new(1, 0, 0, 0));

    assert!(!state.decrement(Player::Two), "zero points stay at zero");
    assert_eq!(state.undo_depth(), 3);

    state.undo();
    assert_eq!(state.score(), ScoreState::new(2, 0, 0, 0));
}

#[test]
fn decrement_is_gated_for_tennis_and_tally() {
    let mut tennis = state_at(Sport::Tennis, ScoreState::new(4, 3, 0, 0));
    assert!(!tennis.decrement(Player::One));
    assert_eq!(tennis.score(), ScoreState::new(4, 3, 0, 0));

    let mut football = state_at(Sport::Football, ScoreState::new(0, 0, 2, 0));
    assert!(!football.decrement(Player::One));
    assert_eq!(football.score().sets_p1, 2);
    assert!(!football.can_undo());
}

#[test]
fn custom_no_set_mode_counts_sets_only() {
    let mut state = MatchState::new(custom(false, 10));
    for _ in 0..5 {
        assert_eq!(state.increment(Player::Two), ScoreEvent::Tally { scorer: Player::Two });
    }
    assert_eq!(state.score(), ScoreState::new(0, 0, 0, 5));
}

#[test]
fn finish_records_sets_and_clears() {
    let mut state = state_at(Sport::Squash, ScoreState::new(7, 3, 2, 1));
    state.increment(Player::One);

    let record = state.finish().unwrap();
    assert_eq!(record.sport, Sport::Squash);
    assert_eq!((record.points_p1, record.points_p2), (2, 1));
    assert_eq!(record.avatars, ["dog.circle", "cat.circle"]);

    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.score(), ScoreState::default());
    assert!(!state.can_undo());
}

#[test]
fn finish_at_love_all_still_records() {
    let mut state = MatchState::new(singles(Sport::Tennis));
    let record = state.finish().unwrap();
    assert_eq!(record.tally(), "0 - 0");
}

#[test]
fn finish_with_elapsed_stamps_duration() {
    let mut state = MatchState::new(singles(Sport::Tennis));
    let record = state.finish_with_elapsed(95).unwrap();
    assert_eq!(record.elapsed_secs, Some(95));
}

#[test]
fn finished_is_terminal() {
    let mut state = MatchState::new(singles(Sport::Badminton));
    state.increment(Player::One);
    state.finish().unwrap();

    assert_eq!(state.increment(Player::One), ScoreEvent::Ignored);
    assert!(!state.decrement(Player::One));
    assert!(!state.undo());
    state.reset();
    assert_eq!(state.phase(), Phase::Finished);

    let err = state.finish().unwrap_err();
    assert_eq!(
        err,
        DomainError::PhaseMismatch {
            expected: Phase::Active,
            actual: Phase::Finished
        }
    );
}

#[test]
fn rematch_starts_clean() {
    let mut state = MatchState::new(singles(Sport::PingPong));
    play(&mut state, &[1, 2, 1]);
    state.finish().unwrap();

    let mut next = state.rematch();
    assert_eq!(next.phase(), Phase::Setup);
    assert!(!next.can_undo());
    next.increment(Player::Two);
    assert_eq!(next.undo_depth(), 1);
    assert_eq!(next.config(), state.config());
}

#[test]
fn reset_discards_progress() {
    let mut state = MatchState::new(singles(Sport::Tennis));
    play(&mut state, &[1, 1, 1, 1, 2]);
    state.reset();
    assert_eq!(state.phase(), Phase::Setup);
    assert_eq!(state.score(), ScoreState::default());
    assert!(!state.can_undo());
}

#[test]
fn snapshot_reflects_state() {
    let state = state_at(Sport::Tennis, ScoreState::new(3, 3, 1, 0));
    let snap = state.snapshot();
    assert_eq!(snap.display_p1, "40");
    assert_eq!(snap.display_p2, "40");
    assert!(snap.deuce);
    assert!(!snap.can_undo);
    assert_eq!(snap.phase, Phase::Active);
    assert_eq!(snap.sport, Sport::Tennis);
}
