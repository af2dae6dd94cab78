use crate::ui::mvi::UiState;
use crate::ui::scoreboard::MatchId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Increment,
    Decrement,
}

impl EntryMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
        }
    }
}

/// Amount form for one match. The target is held by id so the form stays
/// on the right match when earlier matches are deleted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AmountEntryState {
    #[default]
    Hidden,
    Editing {
        mode: EntryMode,
        target: MatchId,
        buffer: String,
    },
}

impl UiState for AmountEntryState {}

impl AmountEntryState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
