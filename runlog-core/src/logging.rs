use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for filtering (defaults to "info" if not set)
/// - Writes to stderr so that stdout only carries command output
/// - JSON output flattens event fields for cleaner log lines
pub fn init_logging(style: LogStyle) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match style {
        LogStyle::Json => builder.json().flatten_event(true).init(),
        LogStyle::Compact => builder
            .compact()
            .with_ansi(io::stderr().is_terminal())
            .init(),
    }
}

pub fn default_log_style() -> LogStyle {
    if io::stderr().is_terminal() {
        LogStyle::Compact
    } else {
        LogStyle::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Json,
    Compact,
}
