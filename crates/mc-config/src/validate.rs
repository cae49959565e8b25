//! Configuration validation errors and semantic validation.

use thiserror::Error;

use crate::engine::{CostWeights, EngineConfig, ParameterDefaults, ZeroDenominator};

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest grid the engine accepts.
pub const MAX_CURVE_RESOLUTION: usize = 100_000;

/// Configuration validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate engine configuration semantically.
pub fn validate_config(config: &EngineConfig) -> ValidationResult<()> {
    if config.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: config.schema_version.clone(),
        });
    }

    if config.curve_resolution < 2 || config.curve_resolution > MAX_CURVE_RESOLUTION {
        return Err(ValidationError::InvalidValue {
            field: "curve_resolution".to_string(),
            message: format!(
                "Must be in [2, {}], got {}",
                MAX_CURVE_RESOLUTION, config.curve_resolution
            ),
        });
    }

    if config.slider_resolution == 0 {
        return Err(ValidationError::InvalidValue {
            field: "slider_resolution".to_string(),
            message: "Must be positive".to_string(),
        });
    }

    if !config.concentration.is_finite() || config.concentration <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "concentration".to_string(),
            message: format!("Must be positive and finite, got {}", config.concentration),
        });
    }

    validate_shape_floor_bounds(config)?;

    if let ZeroDenominator::Fill { value } = config.zero_denominator {
        validate_unit_interval("zero_denominator.value", value)?;
    }

    validate_defaults(config, &config.defaults)?;

    Ok(())
}

/// The floor bounds must keep both Beta shapes positive for every slider
/// position: 0 < min <= max < concentration.
fn validate_shape_floor_bounds(config: &EngineConfig) -> ValidationResult<()> {
    let bounds = &config.shape_floor_bounds;
    for (name, value) in [("min", bounds.min), ("max", bounds.max)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("shape_floor_bounds.{}", name),
                message: format!("Must be positive and finite, got {}", value),
            });
        }
    }

    if bounds.min > bounds.max {
        return Err(ValidationError::SemanticError(format!(
            "shape_floor_bounds.min ({}) exceeds shape_floor_bounds.max ({})",
            bounds.min, bounds.max
        )));
    }

    if bounds.max >= config.concentration {
        return Err(ValidationError::SemanticError(format!(
            "shape_floor_bounds.max ({}) must stay below concentration ({})",
            bounds.max, config.concentration
        )));
    }

    Ok(())
}

fn validate_defaults(config: &EngineConfig, defaults: &ParameterDefaults) -> ValidationResult<()> {
    for (name, value) in [
        ("k_pos", defaults.k_pos),
        ("k_neg", defaults.k_neg),
        ("imbalance", defaults.imbalance),
    ] {
        validate_unit_interval(&format!("defaults.{}", name), value)?;
    }

    let bounds = &config.shape_floor_bounds;
    if !(bounds.min..=bounds.max).contains(&defaults.shape_floor) {
        return Err(ValidationError::InvalidValue {
            field: "defaults.shape_floor".to_string(),
            message: format!(
                "Must be in [{}, {}], got {}",
                bounds.min, bounds.max, defaults.shape_floor
            ),
        });
    }

    validate_weights("defaults.weights", &defaults.weights)
}

/// Validate a value expected in [0, 1].
pub fn validate_unit_interval(field: &str, value: f64) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("Must be in [0, 1], got {}", value),
        });
    }
    Ok(())
}

/// Validate cost weights: finite and non-negative.
pub fn validate_weights(field: &str, weights: &CostWeights) -> ValidationResult<()> {
    for (name, value) in weights.named() {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.{}", field, name),
                message: format!("Must be non-negative and finite, got {}", value),
            });
        }
    }
    Ok(())
}
