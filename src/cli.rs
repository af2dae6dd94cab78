use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "scoreboard",
    version,
    about = "Terminal scoreboard: add matches, adjust their scores, reset them all"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of matches to start with (overrides config)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub matches: Option<u16>,
}

impl Cli {
    /// Load the config named by `--config` (or the default one) and apply
    /// command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(matches) = self.matches {
            config.scoreboard.initial_matches = matches;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args() {
        let cli = Cli::try_parse_from(["scoreboard"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.matches.is_none());
    }

    #[test]
    fn matches_override_config() {
        let cli = Cli::try_parse_from(["scoreboard", "--matches", "4"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.scoreboard.initial_matches, 4);
    }

    #[test]
    fn zero_matches_rejected() {
        assert!(Cli::try_parse_from(["scoreboard", "--matches", "0"]).is_err());
    }

    #[test]
    fn non_numeric_matches_rejected() {
        assert!(Cli::try_parse_from(["scoreboard", "--matches", "many"]).is_err());
    }

    #[test]
    fn config_path_parsed() {
        let cli = Cli::try_parse_from(["scoreboard", "--config", "/tmp/board.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/board.toml")));
    }
}
