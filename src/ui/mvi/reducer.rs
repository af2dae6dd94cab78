//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transition function: `(State, Intent) -> State`.
///
/// Reducers are total. Every intent produces a state, and intents that
/// do not apply (an index past the end, a dialog that is not open) return
/// the input unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and return the next one. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
