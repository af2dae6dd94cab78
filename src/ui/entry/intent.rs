use crate::ui::entry::state::EntryMode;
use crate::ui::mvi::Intent;
use crate::ui::scoreboard::MatchId;

#[derive(Debug, Clone, PartialEq)]
pub enum EntryIntent {
    /// Show an empty form for `target`. Replaces any form already open.
    Open { mode: EntryMode, target: MatchId },
    /// Typed character. Only ASCII digits are kept.
    Input { ch: char },
    Backspace,
    Close,
}

impl Intent for EntryIntent {
    fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "entry_open",
            Self::Input { .. } => "entry_input",
            Self::Backspace => "entry_backspace",
            Self::Close => "entry_close",
        }
    }
}
