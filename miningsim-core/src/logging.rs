use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FORMAT_ENV: &str = "MININGSIM_LOG_FORMAT";

/// Diagnostics go to stderr so they never interleave with the status lines on
/// stdout. The default level is `warn`; raise it with `RUST_LOG`.
pub fn init_logging() {
    match log_format_from_env().unwrap_or_else(default_log_format) {
        LogFormat::Pretty => init_pretty_logging(),
        LogFormat::Json => init_json_logging(),
    }
}

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// - Uses environment variables for log level filtering (defaults to "warn" if not set)
/// - Flattens event fields for cleaner log output
fn init_json_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

fn init_pretty_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn log_format_from_env() -> Option<LogFormat> {
    std::env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(anyhow::anyhow!("invalid log format: {}", other)),
        }
    }
}
