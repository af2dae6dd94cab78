//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use scoreboard::ui::mvi::{Reducer, Store};
use scoreboard::ui::scoreboard::{ScoreboardIntent, ScoreboardReducer, ScoreboardState};
use std::path::PathBuf;
use tempfile::TempDir;

pub type ScoreboardStore = Store<ScoreboardReducer>;

/// Store seeded with the given scores.
pub fn store_with(scores: &[u64]) -> ScoreboardStore {
    Store::new(ScoreboardState::from_scores(scores))
}

/// Run a single intent through the reducer.
pub fn reduce(scores: &[u64], intent: ScoreboardIntent) -> ScoreboardState {
    ScoreboardReducer::reduce(ScoreboardState::from_scores(scores), intent)
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
