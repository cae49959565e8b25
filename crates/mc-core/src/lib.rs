//! Misclassification cost engine.
//!
//! Turns slider-controlled inputs (class shapes, class imbalance, cost and
//! benefit weights) into:
//! - prior-scaled class score densities and their marginal
//! - the calibration curve P(y = 1 | s)
//! - the expected-cost curve over decision thresholds
//! - the cost-optimal operating point
//!
//! Everything is recomputed synchronously on every parameter change.

pub mod algebra;
pub mod cost;
pub mod curve;
pub mod engine;
pub mod error;
pub mod logging;
pub mod mixture;
pub mod optimum;
pub mod params;
pub mod sampler;
pub mod slider;

pub use algebra::{add, divide, scale};
pub use cost::{build_cost_curve, confusion_at, ClassShapes, ConfusionMass};
pub use curve::{Curve, CurveKind, OPTIMAL_THRESHOLD_EQUATION};
pub use engine::{derive_all, load_engine_config, DerivedCurves, Engine, EngineOutput};
pub use error::{Error, Result};
pub use mixture::{build_calibration, build_marginal};
pub use optimum::{locate_optimum, optimal_probability, OptimalPoint};
pub use params::{ClassLabel, CostKind, ParameterEvent, ParameterState};
pub use sampler::{sample_beta_cdf, sample_beta_pdf, sample_class_density, ShapeModel};
pub use slider::SliderId;

pub use mc_config::{CostWeights, EngineConfig, IndexConvention, ZeroDenominator};
