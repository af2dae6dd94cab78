mod common;

use scoreboard::ui::entry::{
    AmountEntryState, EntryIntent, EntryMode, EntryReducer, MAX_AMOUNT_DIGITS,
};
use scoreboard::ui::mvi::Reducer;
use scoreboard::ui::scoreboard::MatchId;

fn editing(buffer: &str) -> (MatchId, AmountEntryState) {
    let target = MatchId::new();
    let state = AmountEntryState::Editing {
        mode: EntryMode::Increment,
        target,
        buffer: buffer.to_string(),
    };
    (target, state)
}

fn buffer_of(state: &AmountEntryState) -> &str {
    match state {
        AmountEntryState::Editing { buffer, .. } => buffer,
        AmountEntryState::Hidden => panic!("expected Editing"),
    }
}

#[test]
fn open_shows_empty_form_for_target() {
    let target = MatchId::new();
    let state = EntryReducer::reduce(
        AmountEntryState::Hidden,
        EntryIntent::Open {
            mode: EntryMode::Decrement,
            target,
        },
    );
    assert_eq!(
        state,
        AmountEntryState::Editing {
            mode: EntryMode::Decrement,
            target,
            buffer: String::new(),
        }
    );
}

#[test]
fn open_replaces_existing_form() {
    let (_, state) = editing("12");
    let other = MatchId::new();
    let state = EntryReducer::reduce(
        state,
        EntryIntent::Open {
            mode: EntryMode::Decrement,
            target: other,
        },
    );
    match state {
        AmountEntryState::Editing {
            mode,
            target,
            buffer,
        } => {
            assert_eq!(mode, EntryMode::Decrement);
            assert_eq!(target, other);
            assert!(buffer.is_empty());
        }
        AmountEntryState::Hidden => panic!("expected Editing"),
    }
}

#[test]
fn digits_are_appended() {
    let (_, state) = editing("");
    let state = EntryReducer::reduce(state, EntryIntent::Input { ch: '4' });
    let state = EntryReducer::reduce(state, EntryIntent::Input { ch: '2' });
    assert_eq!(buffer_of(&state), "42");
}

#[test]
fn non_digits_are_ignored() {
    let (_, state) = editing("1");
    let state = EntryReducer::reduce(state, EntryIntent::Input { ch: '-' });
    let state = EntryReducer::reduce(state, EntryIntent::Input { ch: 'e' });
    let state = EntryReducer::reduce(state, EntryIntent::Input { ch: '.' });
    assert_eq!(buffer_of(&state), "1");
}

#[test]
fn buffer_is_capped() {
    let (_, state) = editing(&"9".repeat(MAX_AMOUNT_DIGITS));
    let state = EntryReducer::reduce(state, EntryIntent::Input { ch: '9' });
    assert_eq!(buffer_of(&state).len(), MAX_AMOUNT_DIGITS);
}

#[test]
fn backspace_removes_last_digit() {
    let (_, state) = editing("123");
    let state = EntryReducer::reduce(state, EntryIntent::Backspace);
    assert_eq!(buffer_of(&state), "12");
}

#[test]
fn backspace_on_empty_buffer_keeps_form() {
    let (target, state) = editing("");
    let state = EntryReducer::reduce(state, EntryIntent::Backspace);
    assert!(state.is_visible());
    assert!(matches!(state, AmountEntryState::Editing { target: t, .. } if t == target));
}

#[test]
fn close_hides_form() {
    let (_, state) = editing("5");
    let state = EntryReducer::reduce(state, EntryIntent::Close);
    assert_eq!(state, AmountEntryState::Hidden);
}

#[test]
fn editing_intents_on_hidden_form_are_noops() {
    for intent in [EntryIntent::Input { ch: '1' }, EntryIntent::Backspace] {
        let state = EntryReducer::reduce(AmountEntryState::Hidden, intent);
        assert_eq!(state, AmountEntryState::Hidden);
    }
}

#[test]
fn mode_labels() {
    assert_eq!(EntryMode::Increment.label(), "Increment");
    assert_eq!(EntryMode::Decrement.label(), "Decrement");
}
