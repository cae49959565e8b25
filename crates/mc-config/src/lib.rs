//! Misclassification cost engine configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for engine.json
//! - Config resolution (explicit path → env → XDG → defaults)
//! - Semantic validation

pub mod engine;
pub mod resolve;
pub mod validate;

pub use engine::{
    CostWeights, EngineConfig, IndexConvention, ParameterDefaults, ShapeFloorBounds,
    ZeroDenominator,
};
pub use resolve::{load_config, resolve_config, ConfigPath, ConfigSource};
pub use validate::{validate_config, ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
