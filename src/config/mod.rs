//! Configuration loading.
//!
//! A TOML file at `Config::config_path()` (or a path given on the command
//! line) overrides the defaults section by section.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, ScoreboardConfig, UiConfig};
