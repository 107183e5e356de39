use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Used when `RUST_LOG` is unset. Quiet by default; stdout belongs to the run summary.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Pretty,
    Json,
}

/// Initialize the logging system on stderr with environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "warn" if not set)
/// - Human-readable output on a terminal, flattened JSON otherwise
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match default_log_mode() {
        LogMode::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
        LogMode::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}
