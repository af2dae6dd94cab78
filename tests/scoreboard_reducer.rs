mod common;

use common::reduce;
use scoreboard::ui::mvi::{Intent, Reducer};
use scoreboard::ui::scoreboard::{ScoreboardIntent, ScoreboardReducer, ScoreboardState};

#[test]
fn increment_on_fresh_board() {
    let state = ScoreboardReducer::reduce(
        ScoreboardState::default(),
        ScoreboardIntent::increment(0, 5),
    );
    assert_eq!(state.scores(), vec![5]);
}

#[test]
fn decrement_clamps_at_zero() {
    assert_eq!(reduce(&[3], ScoreboardIntent::decrement(0, 10)).scores(), vec![0]);
}

#[test]
fn decrement_subtracts() {
    assert_eq!(reduce(&[9], ScoreboardIntent::decrement(0, 4)).scores(), vec![5]);
}

#[test]
fn increment_only_touches_target() {
    assert_eq!(
        reduce(&[1, 2, 3], ScoreboardIntent::increment(1, 10)).scores(),
        vec![1, 12, 3]
    );
}

#[test]
fn reset_all_zeroes_every_score() {
    assert_eq!(reduce(&[2, 7], ScoreboardIntent::reset_all()).scores(), vec![0, 0]);
}

#[test]
fn reset_all_is_idempotent() {
    let once = reduce(&[2, 7, 0], ScoreboardIntent::reset_all());
    let twice = ScoreboardReducer::reduce(once.clone(), ScoreboardIntent::reset_all());
    assert_eq!(once, twice);
}

#[test]
fn add_match_appends_zero() {
    let state = reduce(&[1], ScoreboardIntent::add_match());
    assert_eq!(state.scores(), vec![1, 0]);
}

#[test]
fn add_match_to_empty_board() {
    let state = reduce(&[], ScoreboardIntent::add_match());
    assert_eq!(state.scores(), vec![0]);
}

#[test]
fn delete_match_shifts_later_matches_down() {
    let before = ScoreboardState::from_scores(&[1, 2, 3]);
    let third = before.matches[2].id;
    let after = ScoreboardReducer::reduce(before, ScoreboardIntent::delete_match(1));
    assert_eq!(after.scores(), vec![1, 3]);
    assert_eq!(after.position_of(third), Some(1));
}

#[test]
fn out_of_range_indices_are_noops() {
    let before = ScoreboardState::from_scores(&[4]);
    for intent in [
        ScoreboardIntent::increment(99, 5),
        ScoreboardIntent::decrement(99, 5),
        ScoreboardIntent::delete_match(99),
        ScoreboardIntent::delete_match(1),
    ] {
        let after = ScoreboardReducer::reduce(before.clone(), intent);
        assert_eq!(after, before, "{:?} changed the state", intent);
    }
}

#[test]
fn input_state_is_not_mutated() {
    let before = ScoreboardState::from_scores(&[1, 2]);
    let snapshot = before.clone();
    for intent in [
        ScoreboardIntent::increment(0, 3),
        ScoreboardIntent::decrement(1, 1),
        ScoreboardIntent::reset_all(),
        ScoreboardIntent::add_match(),
        ScoreboardIntent::delete_match(0),
    ] {
        let after = ScoreboardReducer::reduce(before.clone(), intent);
        assert_ne!(after, before);
        assert_eq!(before, snapshot);
    }
}

/// Same transitions on plain signed integers, clamped the way the
/// scoreboard promises.
fn model_apply(model: &mut Vec<i128>, intent: ScoreboardIntent) {
    match intent {
        ScoreboardIntent::Increment { index, value } => {
            if let Some(score) = model.get_mut(index) {
                *score = (*score + i128::from(value)).max(0);
            }
        }
        ScoreboardIntent::Decrement { index, value } => {
            if let Some(score) = model.get_mut(index) {
                *score = (*score - i128::from(value)).max(0);
            }
        }
        ScoreboardIntent::ResetAll => model.iter_mut().for_each(|score| *score = 0),
        ScoreboardIntent::AddMatch => model.push(0),
        ScoreboardIntent::DeleteMatch { index } => {
            if index < model.len() {
                model.remove(index);
            }
        }
    }
}

#[test]
fn matches_clamped_model_over_a_long_sequence() {
    let intents = [
        ScoreboardIntent::increment(0, 3),
        ScoreboardIntent::decrement(0, 5),
        ScoreboardIntent::add_match(),
        ScoreboardIntent::decrement(1, 1),
        ScoreboardIntent::increment(1, 2),
        ScoreboardIntent::add_match(),
        ScoreboardIntent::increment(2, 40),
        ScoreboardIntent::decrement(1, 100),
        ScoreboardIntent::delete_match(0),
        ScoreboardIntent::increment(0, -50),
        ScoreboardIntent::decrement(1, 15),
        ScoreboardIntent::delete_match(7),
    ];
    let mut state = ScoreboardState::default();
    let mut model: Vec<i128> = vec![0];
    for intent in intents {
        state = ScoreboardReducer::reduce(state, intent);
        model_apply(&mut model, intent);
        let expected: Vec<u64> = model.iter().map(|score| *score as u64).collect();
        assert_eq!(state.scores(), expected, "after {:?}", intent);
    }
    assert_eq!(state.scores(), vec![0, 25]);
}

#[test]
fn intent_names() {
    assert_eq!(ScoreboardIntent::increment(0, 1).name(), "increment");
    assert_eq!(ScoreboardIntent::decrement(0, 1).name(), "decrement");
    assert_eq!(ScoreboardIntent::reset_all().name(), "reset_all");
    assert_eq!(ScoreboardIntent::add_match().name(), "add_match");
    assert_eq!(ScoreboardIntent::delete_match(0).name(), "delete_match");
}

#[test]
fn constructors_build_expected_variants() {
    assert_eq!(
        ScoreboardIntent::increment(2, 7),
        ScoreboardIntent::Increment { index: 2, value: 7 }
    );
    assert_eq!(
        ScoreboardIntent::decrement(1, 3),
        ScoreboardIntent::Decrement { index: 1, value: 3 }
    );
    assert_eq!(
        ScoreboardIntent::delete_match(4),
        ScoreboardIntent::DeleteMatch { index: 4 }
    );
}
