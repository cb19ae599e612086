//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Resolve the log level from config, `-v` flags and environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for scripts, pretty format for terminals
//! - Log level configurable via config and environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Raise the configured level by `verbosity` steps, starting at `debug`.
///
/// `-v` means at least debug, `-vv` at least trace. A configured level that
/// is already more verbose is kept.
pub fn effective_level(configured: &str, verbosity: u8) -> &'static str {
    let configured = configured.to_ascii_lowercase();
    let base = LEVELS
        .iter()
        .position(|l| *l == configured)
        .unwrap_or(2);
    let requested = match verbosity {
        0 => 0,
        v => (3 + v as usize).min(LEVELS.len() - 1),
    };
    LEVELS[base.max(requested)]
}

/// Install the global subscriber. Call once, from the binary.
pub fn init_logging(config: &ObservabilityConfig, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(&config.log_level, verbosity)));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level("warn", 0), "warn");
        assert_eq!(effective_level("warn", 1), "debug");
        assert_eq!(effective_level("warn", 2), "trace");
        assert_eq!(effective_level("warn", 9), "trace");
        assert_eq!(effective_level("TRACE", 1), "trace");
        assert_eq!(effective_level("error", 0), "error");
        assert_eq!(effective_level("bogus", 0), "warn");
    }
}
