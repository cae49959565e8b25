//! Engine configuration types.
//!
//! These types match the engine.json file layout. Every field except
//! `schema_version` falls back to the built-in default when omitted.

use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Number of grid points every curve is sampled at.
    #[serde(default = "default_curve_resolution")]
    pub curve_resolution: usize,

    /// Number of discrete positions on each slider.
    #[serde(default = "default_slider_resolution")]
    pub slider_resolution: u32,

    /// Total Beta concentration `alpha + beta` shared by both classes.
    #[serde(default = "default_concentration")]
    pub concentration: f64,

    #[serde(default)]
    pub shape_floor_bounds: ShapeFloorBounds,

    #[serde(default)]
    pub zero_denominator: ZeroDenominator,

    #[serde(default)]
    pub index_convention: IndexConvention,

    #[serde(default)]
    pub defaults: ParameterDefaults,
}

fn default_curve_resolution() -> usize {
    500
}

fn default_slider_resolution() -> u32 {
    500
}

fn default_concentration() -> f64 {
    14.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            description: None,
            curve_resolution: default_curve_resolution(),
            slider_resolution: default_slider_resolution(),
            concentration: default_concentration(),
            shape_floor_bounds: ShapeFloorBounds::default(),
            zero_denominator: ZeroDenominator::default(),
            index_convention: IndexConvention::default(),
            defaults: ParameterDefaults::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Map a shape-floor slider fraction in [0, 1] onto the floor bounds.
    pub fn shape_floor_from_fraction(&self, k: f64) -> f64 {
        let bounds = &self.shape_floor_bounds;
        bounds.min + k * (bounds.max - bounds.min)
    }

    /// Inverse of [`EngineConfig::shape_floor_from_fraction`].
    ///
    /// Degenerate bounds (min == max) map to 0.
    pub fn shape_floor_fraction(&self, floor: f64) -> f64 {
        let bounds = &self.shape_floor_bounds;
        let span = bounds.max - bounds.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((floor - bounds.min) / span).clamp(0.0, 1.0)
    }
}

/// Range the shape-floor control sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeFloorBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ShapeFloorBounds {
    fn default() -> Self {
        Self { min: 1.0, max: 3.0 }
    }
}

/// What the calibration ratio yields where the marginal density is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ZeroDenominator {
    /// IEEE semantics: 0/0 is NaN, x/0 is infinite.
    #[default]
    Nan,
    /// Replace the ratio with a fixed value.
    Fill { value: f64 },
}

/// How the optimum locator maps a calibration sample to grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexConvention {
    /// Cost and probability coordinates are read at the same score.
    #[default]
    Aligned,
    /// Reproduces the offsets of the original interactive page.
    Legacy,
}

impl std::fmt::Display for IndexConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexConvention::Aligned => write!(f, "aligned"),
            IndexConvention::Legacy => write!(f, "legacy"),
        }
    }
}

/// Unit costs and benefits per classified or reviewed item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostWeights {
    pub false_positive: f64,
    pub false_negative: f64,
    pub true_positive: f64,
    pub true_negative: f64,
    pub review: f64,
}

impl CostWeights {
    pub fn new(
        false_positive: f64,
        false_negative: f64,
        true_positive: f64,
        true_negative: f64,
        review: f64,
    ) -> Self {
        Self {
            false_positive,
            false_negative,
            true_positive,
            true_negative,
            review,
        }
    }

    /// All weights zero.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Weights as `(name, value)` pairs, for validation and diagnostics.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("false_positive", self.false_positive),
            ("false_negative", self.false_negative),
            ("true_positive", self.true_positive),
            ("true_negative", self.true_negative),
            ("review", self.review),
        ]
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        Self::new(0.3, 0.2, 0.0, 0.0, 0.0)
    }
}

/// Parameter state the engine starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefaults {
    /// Shape control of the positive class, in [0, 1].
    pub k_pos: f64,
    /// Shape control of the negative class, in [0, 1].
    pub k_neg: f64,
    /// Positive-class prior, in [0, 1].
    pub imbalance: f64,
    /// Shape floor itself (not the slider fraction).
    pub shape_floor: f64,
    pub weights: CostWeights,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            k_pos: 0.84,
            k_neg: 0.0,
            imbalance: 0.5,
            shape_floor: 2.0,
            weights: CostWeights::default(),
        }
    }
}
