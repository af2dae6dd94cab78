use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file. Takes precedence over
/// `[logging] file` in the config.
pub const LOG_ENV_VAR: &str = "SCOREBOARD_LOG";

/// Initialize tracing with file output.
///
/// Nothing is installed when no log path is configured: the TUI owns the
/// terminal and must not be written to.
///
/// Each run writes to `{path}.{timestamp}.{pid}` so concurrent instances
/// never share a file.
pub fn init_tracing(config: &LoggingConfig) {
    let Some(path) = log_path(std::env::var_os(LOG_ENV_VAR).map(PathBuf::from), config)
    else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", path.display(), timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn log_path(from_env: Option<PathBuf>, config: &LoggingConfig) -> Option<PathBuf> {
    from_env
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| config.file.clone())
}
