//! Structured logging for the cost engine.
//!
//! The engine emits `tracing` events; this module installs a subscriber
//! that writes them to stderr either as human-readable lines or as JSONL.
//!
//! ```ignore
//! use mc_core::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::from_env());
//! ```
//!
//! Embedding hosts that already own a subscriber can skip this module; the
//! engine only depends on `tracing` macros.

pub mod config;
pub mod events;

pub use config::{LogConfig, LogFormat};
pub use events::{event_names, Stage};

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` directives take precedence over `config.level`. Returns false
/// if a global subscriber was already set, in which case nothing changes.
pub fn init_logging(config: &LogConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.directive()));

    match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi);

            if config.timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer)
                    .try_init()
                    .is_ok()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .try_init()
                    .is_ok()
            }
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
    }
}

/// Initialize logging from the environment (for tests and simple hosts).
pub fn init_default_logging() -> bool {
    init_logging(&LogConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_second_init_is_harmless() {
        let config = LogConfig {
            level: LevelFilter::OFF,
            ..LogConfig::default()
        };
        let _ = init_logging(&config);
        // A subscriber is now installed either way; the second call reports it.
        assert!(!init_logging(&config));
    }
}
