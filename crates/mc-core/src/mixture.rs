//! Marginal score density and probability calibration.
//!
//! Both inputs are class densities already scaled by their class priors,
//! so their sum is the marginal density f(s) and the ratio of the positive
//! curve to the marginal is the posterior P(y = 1 | s).

use mc_config::ZeroDenominator;

use crate::algebra::{add, divide};
use crate::curve::Curve;
use crate::error::Result;

/// f(s) = pi * f(s | y = 1) + (1 - pi) * f(s | y = 0).
pub fn build_marginal(pos_scaled: &Curve, neg_scaled: &Curve) -> Result<Curve> {
    add(pos_scaled, neg_scaled)
}

/// P(y = 1 | s) on the interior of the grid (boundary samples dropped).
pub fn build_calibration(
    pos_scaled: &Curve,
    marginal: &Curve,
    policy: ZeroDenominator,
) -> Result<Curve> {
    divide(pos_scaled, marginal, policy)
}
