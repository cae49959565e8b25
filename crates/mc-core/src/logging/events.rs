//! Stable event names and pipeline stages for structured logs.
//!
//! Every engine log line carries an `event` field from [`event_names`] and
//! a `stage` field, so JSONL consumers can filter without parsing messages.

use serde::{Deserialize, Serialize};

/// Pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Configuration loading and engine construction.
    Init,
    /// Applying a parameter event.
    Update,
    /// Sampling densities and building curves.
    Derive,
    /// Optimum lookup.
    Locate,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Init => "init",
            Stage::Update => "update",
            Stage::Derive => "derive",
            Stage::Locate => "locate",
        };
        write!(f, "{}", s)
    }
}

/// Standard event names used in logging.
pub mod event_names {
    // Config/init
    pub const CONFIG_LOADED: &str = "config.loaded";
    pub const CONFIG_DEFAULT_USED: &str = "config.default_used";
    pub const ENGINE_CREATED: &str = "engine.created";

    // Updates
    pub const ENGINE_UPDATE: &str = "engine.update";
    pub const ENGINE_UPDATE_REJECTED: &str = "engine.update_rejected";

    // Pipeline
    pub const CURVES_DERIVED: &str = "curves.derived";
    pub const OPTIMUM_LOCATED: &str = "optimum.located";
    pub const OPTIMUM_UNAVAILABLE: &str = "optimum.unavailable";
}
