//! Expected misclassification cost as a function of the decision threshold.
//!
//! Scores above the threshold are predicted positive and sent to review.
//! For a threshold `t` the class CDFs give the mass on each side:
//!
//! ```text
//! FN(t) = pi * F_pos(t)          TP(t) = pi - FN(t)
//! TN(t) = (1 - pi) * F_neg(t)    FP(t) = (1 - pi) - TN(t)
//! C(t)  = FP*k_FP + FN*k_FN - TP*k_TP - TN*k_TN + (TP + FP)*k_rev
//! ```
//!
//! TP and TN weights are benefits, so the curve can go negative.

use mc_config::CostWeights;
use mc_math::{beta_cdf, unit_grid};
use serde::Serialize;

use crate::curve::Curve;
use crate::error::{ensure_unit, Error, Result};
use crate::sampler::{ensure_resolution, ShapeModel};

/// Probability mass of each confusion-matrix cell at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfusionMass {
    pub threshold: f64,
    pub true_positive: f64,
    pub false_positive: f64,
    pub true_negative: f64,
    pub false_negative: f64,
}

impl ConfusionMass {
    /// Mass predicted positive, i.e. sent to review.
    pub fn reviewed(&self) -> f64 {
        self.true_positive + self.false_positive
    }

    /// Expected cost of this split under `weights`.
    pub fn cost(&self, weights: &CostWeights) -> f64 {
        [
            self.false_positive * weights.false_positive,
            self.false_negative * weights.false_negative,
            -self.true_positive * weights.true_positive,
            -self.true_negative * weights.true_negative,
            self.reviewed() * weights.review,
        ]
        .iter()
        .sum()
    }
}

/// Beta shapes of both classes for one cost computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassShapes {
    pub pos: (f64, f64),
    pub neg: (f64, f64),
}

impl ClassShapes {
    pub fn from_controls(k_pos: f64, k_neg: f64, shape: &ShapeModel) -> Result<Self> {
        Ok(Self {
            pos: shape.alpha_beta(k_pos)?,
            neg: shape.alpha_beta(k_neg)?,
        })
    }
}

/// Confusion masses at threshold `x` for positive-class prior `imbalance`.
pub fn confusion_at(x: f64, shapes: &ClassShapes, imbalance: f64) -> ConfusionMass {
    let w_pos = imbalance;
    let w_neg = 1.0 - imbalance;
    let false_negative = w_pos * beta_cdf(x, shapes.pos.0, shapes.pos.1);
    let true_negative = w_neg * beta_cdf(x, shapes.neg.0, shapes.neg.1);
    ConfusionMass {
        threshold: x,
        true_positive: w_pos - false_negative,
        false_positive: w_neg - true_negative,
        true_negative,
        false_negative,
    }
}

/// Expected cost at every grid threshold.
pub fn build_cost_curve(
    k_pos: f64,
    k_neg: f64,
    imbalance: f64,
    shape: &ShapeModel,
    weights: &CostWeights,
    resolution: usize,
) -> Result<Curve> {
    ensure_unit("imbalance", imbalance)?;
    ensure_weights(weights)?;
    ensure_resolution(resolution)?;
    let shapes = ClassShapes::from_controls(k_pos, k_neg, shape)?;
    let xs = unit_grid(resolution);
    Ok(Curve::from_grid(&xs, |x| {
        confusion_at(x, &shapes, imbalance).cost(weights)
    }))
}

pub(crate) fn ensure_weights(weights: &CostWeights) -> Result<()> {
    for (name, value) in weights.named() {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::invalid(
                name,
                format!("must be non-negative and finite, got {}", value),
            ));
        }
    }
    Ok(())
}
