use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for CLI commands: compact output on stderr, plus an
/// optional JSON file log.
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module path
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer);

    match log_file {
        Some(log_path) => subscriber.with(file_layer(&log_path)).init(),
        None => subscriber.init(),
    }
}

/// Initialize logging for the TUI. The TUI owns the terminal, so stderr is
/// off limits while the alternate screen is active; events go to the JSON
/// file log when one is configured and are dropped otherwise.
pub fn init_tui(verbose: bool, log_file: Option<PathBuf>) {
    if let Some(log_path) = log_file {
        tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(file_layer(&log_path))
            .init();
    }
}

/// Log level from the verbose flag, overridable via RUST_LOG.
fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pokedex={}", default_level)))
}

/// Daily-rolling JSON file layer for structured logs.
fn file_layer<S>(log_path: &Path) -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    // Create log directory if it doesn't exist
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("pokedex.log")),
    );

    fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false) // No colors in file
        .json()
}
