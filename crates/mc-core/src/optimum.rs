//! Cost-optimal operating point.
//!
//! The optimal calibrated probability comes from the weights alone; the
//! threshold is then found by looking up the calibration sample closest to
//! that probability and reading the cost curve at the matching grid index.

use mc_config::{CostWeights, IndexConvention};
use serde::Serialize;

use crate::curve::Curve;
use crate::error::{Error, Result};

/// Located optimum, in both cost space and probability space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalPoint {
    /// Score used as the decision threshold (x of the cost point).
    pub threshold_score: f64,
    pub cost_at_threshold: f64,
    /// Calibrated probability shown at the threshold (y of the probability point).
    pub calibrated_prob_at_threshold: f64,
    /// Closed-form optimal probability the lookup searched for.
    pub target_probability: f64,
    /// Index into the cost curve.
    pub grid_index: usize,
    /// x of the probability point. Equal to `threshold_score` unless the
    /// legacy convention shifted the probability read.
    pub probability_score: f64,
}

/// `(wFP + wTN + wReview) / (wFP + wFN + wTN + wTP)`, or 0.5 when the
/// denominator is zero.
pub fn optimal_probability(weights: &CostWeights) -> f64 {
    let num = weights.false_positive + weights.true_negative + weights.review;
    let den = weights.false_positive
        + weights.false_negative
        + weights.true_negative
        + weights.true_positive;
    if den == 0.0 {
        0.5
    } else {
        num / den
    }
}

/// Find the optimal threshold on `cost` using `calibration`.
///
/// `calibration` is the interior of the grid: sample `j` sits on grid
/// index `j + 1` of `cost`.
pub fn locate_optimum(
    weights: &CostWeights,
    cost: &Curve,
    calibration: &Curve,
    convention: IndexConvention,
) -> Result<OptimalPoint> {
    let last = calibration
        .last_index()
        .ok_or_else(|| Error::NotAvailable("calibration curve is empty".to_string()))?;
    let target = optimal_probability(weights);

    let (grid_index, prob_index) = match convention {
        IndexConvention::Aligned => {
            let j = nearest_finite(calibration, target).ok_or_else(|| {
                Error::NotAvailable("calibration curve has no finite values".to_string())
            })?;
            (j + 1, j)
        }
        IndexConvention::Legacy => {
            let grid_index = legacy_grid_index(calibration, target);
            (grid_index, (grid_index + 1).min(last))
        }
    };

    let (threshold_score, cost_at_threshold) =
        cost.get(grid_index).ok_or(Error::LengthMismatch {
            left: cost.len(),
            right: calibration.len() + 2,
        })?;
    let (probability_score, calibrated_prob_at_threshold) = calibration
        .get(prob_index)
        .ok_or_else(|| Error::NotAvailable(format!("calibration index {}", prob_index)))?;

    Ok(OptimalPoint {
        threshold_score,
        cost_at_threshold,
        calibrated_prob_at_threshold,
        target_probability: target,
        grid_index,
        probability_score,
    })
}

/// Index of the calibration sample closest to `target`, skipping
/// non-finite samples. Ties keep the first.
fn nearest_finite(calibration: &Curve, target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (_, p)) in calibration.points().iter().enumerate() {
        if !p.is_finite() {
            continue;
        }
        let d = (target - p).abs();
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Grid index picked by the page's scan: it starts at grid 0 with a
/// distance of 1, and a sample only replaces the current pick when it is
/// at least as close. Ties keep the last. Returns 0 when no finite sample
/// lies within 1 of `target`.
fn legacy_grid_index(calibration: &Curve, target: f64) -> usize {
    let mut grid_index = 0;
    let mut diff = 1.0;
    for (i, (_, p)) in calibration.points().iter().enumerate() {
        let d = (target - p).abs();
        // NaN distances compare false.
        if d.is_finite() && d <= diff {
            diff = d;
            grid_index = i + 1;
        }
    }
    grid_index
}
