mod intent;
mod reducer;
mod state;

pub use intent::ScoreboardIntent;
pub use reducer::ScoreboardReducer;
pub use state::{Match, MatchId, ScoreboardState};
