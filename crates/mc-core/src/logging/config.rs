//! Logging configuration.
//!
//! `MC_LOG` sets the engine level (`off`, `error` ... `trace`) and
//! `MC_LOG_FORMAT` picks `human` or `jsonl`. `RUST_LOG`, when set, is
//! handled by the subscriber's `EnvFilter` and overrides the level.

use tracing_subscriber::filter::LevelFilter;

pub const ENV_LOG_LEVEL: &str = "MC_LOG";
pub const ENV_LOG_FORMAT: &str = "MC_LOG_FORMAT";

/// Output format of the stderr subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Human,
    /// One JSON object per event.
    Jsonl,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(LogFormat::Human),
            "jsonl" | "json" => Ok(LogFormat::Jsonl),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Applied to `mc_core` and `mc_config` only.
    pub level: LevelFilter,
    /// Timestamps on human lines. JSON lines always carry one.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: LogFormat::Human,
            level: LevelFilter::INFO,
            timestamps: true,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Config from an arbitrary variable lookup. Unparseable values keep
    /// the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LogConfig::default();
        if let Some(level) = lookup(ENV_LOG_LEVEL).and_then(|v| v.parse().ok()) {
            config.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT).and_then(|v| v.parse().ok()) {
            config.format = format;
        }
        config
    }

    /// `EnvFilter` directive for the engine crates.
    pub fn directive(&self) -> String {
        let level = self.level.to_string().to_ascii_lowercase();
        format!("mc_core={level},mc_config={level}")
    }
}
