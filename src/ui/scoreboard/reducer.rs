use crate::ui::mvi::Reducer;
use crate::ui::scoreboard::intent::ScoreboardIntent;
use crate::ui::scoreboard::state::{Match, ScoreboardState};

pub struct ScoreboardReducer;

impl Reducer for ScoreboardReducer {
    type State = ScoreboardState;
    type Intent = ScoreboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScoreboardIntent::Increment { index, value } => {
                update_score(state, index, |score| score.saturating_add_signed(value))
            }
            ScoreboardIntent::Decrement { index, value } => update_score(state, index, |score| {
                score.saturating_add_signed(value.saturating_neg())
            }),
            ScoreboardIntent::ResetAll => ScoreboardState {
                matches: state
                    .matches
                    .into_iter()
                    .map(|m| Match { score: 0, ..m })
                    .collect(),
            },
            ScoreboardIntent::AddMatch => {
                let mut matches = state.matches;
                matches.push(Match::new());
                ScoreboardState { matches }
            }
            ScoreboardIntent::DeleteMatch { index } => {
                let mut matches = state.matches;
                if index < matches.len() {
                    matches.remove(index);
                }
                ScoreboardState { matches }
            }
        }
    }
}

/// Apply `f` to the score at `index`; out-of-range indices leave the
/// state untouched.
fn update_score(
    mut state: ScoreboardState,
    index: usize,
    f: impl FnOnce(u64) -> u64,
) -> ScoreboardState {
    if let Some(entry) = state.matches.get_mut(index) {
        entry.score = f(entry.score);
    }
    state
}
