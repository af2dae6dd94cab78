use crate::ui::entry::intent::EntryIntent;
use crate::ui::entry::state::AmountEntryState;
use crate::ui::mvi::Reducer;

/// Longest amount that still fits in an `i64`.
pub const MAX_AMOUNT_DIGITS: usize = 18;

pub struct EntryReducer;

impl Reducer for EntryReducer {
    type State = AmountEntryState;
    type Intent = EntryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EntryIntent::Open { mode, target } => AmountEntryState::Editing {
                mode,
                target,
                buffer: String::new(),
            },
            EntryIntent::Close => AmountEntryState::Hidden,
            EntryIntent::Input { ch } => match state {
                AmountEntryState::Editing {
                    mode,
                    target,
                    mut buffer,
                } => {
                    if ch.is_ascii_digit() && buffer.len() < MAX_AMOUNT_DIGITS {
                        buffer.push(ch);
                    }
                    AmountEntryState::Editing {
                        mode,
                        target,
                        buffer,
                    }
                }
                other => other,
            },
            EntryIntent::Backspace => match state {
                AmountEntryState::Editing {
                    mode,
                    target,
                    mut buffer,
                } => {
                    buffer.pop();
                    AmountEntryState::Editing {
                        mode,
                        target,
                        buffer,
                    }
                }
                other => other,
            },
        }
    }
}
