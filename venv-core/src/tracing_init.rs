//! Tracing initialization for clean-venvs.
//!
//! Logs always go to stderr so they never interleave with the interactive
//! dialogue on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, VenvError};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber with environment-based configuration
///
/// Uses standard RUST_LOG environment variable for filtering:
/// - `RUST_LOG=debug` - Set global level
/// - `RUST_LOG=clean_venvs=debug,venv_detector=info` - Set per-module levels
///
/// Uses RUST_LOG_FORMAT for output format (optional):
/// - `json` - JSON formatted output
/// - `pretty` - Pretty formatted output (default)
/// - `compact` - Compact single-line output
pub fn init() -> Result<()> {
    init_with_defaults(DEFAULT_FILTER)
}

/// Initialize with a default filter if RUST_LOG is not set
pub fn init_with_defaults(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format.as_str() {
        "json" => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false).json())
            .try_init(),
        "compact" => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .try_init(),
        _ => registry
            .with(fmt::layer().with_writer(std::io::stderr).pretty())
            .try_init(),
    };

    result.map_err(|e| VenvError::Internal(format!("Failed to initialize tracing: {}", e)))
}

/// Initialize for testing with a specific configuration
#[cfg(test)]
pub fn init_for_testing() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init()
        .map_err(|e| VenvError::Internal(format!("Failed to initialize test tracing: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_initialization_is_reported() {
        // Whichever call wins the global subscriber, a later one must fail
        // with an error rather than panic.
        let _ = init_for_testing();
        let err = init_with_defaults("info").unwrap_err();
        assert!(err.to_string().contains("Failed to initialize tracing"));
    }
}
