use crate::ui::mvi::Intent;

/// Requested scoreboard changes. Indices are positions in
/// `ScoreboardState::matches` at the time of dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreboardIntent {
    Increment { index: usize, value: i64 },
    /// Score is floored at zero.
    Decrement { index: usize, value: i64 },
    ResetAll,
    AddMatch,
    /// Later matches shift down one position.
    DeleteMatch { index: usize },
}

impl ScoreboardIntent {
    pub fn increment(index: usize, value: i64) -> Self {
        Self::Increment { index, value }
    }

    pub fn decrement(index: usize, value: i64) -> Self {
        Self::Decrement { index, value }
    }

    pub fn reset_all() -> Self {
        Self::ResetAll
    }

    pub fn add_match() -> Self {
        Self::AddMatch
    }

    pub fn delete_match(index: usize) -> Self {
        Self::DeleteMatch { index }
    }
}

impl Intent for ScoreboardIntent {
    fn name(&self) -> &'static str {
        match self {
            Self::Increment { .. } => "increment",
            Self::Decrement { .. } => "decrement",
            Self::ResetAll => "reset_all",
            Self::AddMatch => "add_match",
            Self::DeleteMatch { .. } => "delete_match",
        }
    }
}
