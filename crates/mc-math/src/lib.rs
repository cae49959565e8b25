//! Numerical primitives for the misclassification cost engine.

pub mod math;

pub use math::beta::*;
pub use math::grid::*;
pub use math::stable::*;
