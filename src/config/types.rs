use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoreboard: ScoreboardConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Initial board layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Matches present at startup, each at score 0 (default: 1).
    pub initial_matches: u16,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds (default: 250).
    pub tick_rate_ms: u64,
}

/// Log output. Logging stays off unless a file is named here or in
/// `SCOREBOARD_LOG`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
}

fn default_initial_matches() -> u16 {
    1
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            initial_matches: default_initial_matches(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
