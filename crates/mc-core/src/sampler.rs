//! Beta density and CDF sampling over the score grid.
//!
//! Each class is modelled as a Beta distribution whose shapes come from a
//! single control `k` in [0, 1]: `alpha = floor + k * (sum - 2 * floor)` and
//! `beta = sum - alpha`. At `k = 0` the mass sits near score 0, at `k = 1`
//! near score 1, and `k = 0.5` is symmetric.

use mc_math::{beta_cdf, beta_pdf, unit_grid};

use crate::algebra::scale;
use crate::curve::Curve;
use crate::error::{ensure_unit, Error, Result};

/// Maps a class shape control to Beta shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeModel {
    /// Smallest shape parameter either class can reach.
    pub floor: f64,
    /// Total concentration `alpha + beta`.
    pub concentration: f64,
}

impl ShapeModel {
    pub fn new(floor: f64, concentration: f64) -> Result<Self> {
        if !concentration.is_finite() || concentration <= 0.0 {
            return Err(Error::invalid(
                "concentration",
                format!("must be positive and finite, got {}", concentration),
            ));
        }
        if !floor.is_finite() || floor <= 0.0 || floor >= concentration {
            return Err(Error::invalid(
                "shape_floor",
                format!("must be in (0, {}), got {}", concentration, floor),
            ));
        }
        Ok(Self {
            floor,
            concentration,
        })
    }

    /// `(alpha, beta)` for the control value `k`.
    pub fn alpha_beta(&self, k: f64) -> Result<(f64, f64)> {
        ensure_unit("k", k)?;
        let alpha = self.floor + k * (self.concentration - 2.0 * self.floor);
        let beta = self.concentration - alpha;
        ensure_shape(alpha, beta)?;
        Ok((alpha, beta))
    }
}

impl Default for ShapeModel {
    fn default() -> Self {
        Self {
            floor: 2.0,
            concentration: 14.0,
        }
    }
}

/// Beta PDF at `resolution` evenly spaced scores over [0, 1].
pub fn sample_beta_pdf(alpha: f64, beta: f64, resolution: usize) -> Result<Curve> {
    let xs = checked_grid(alpha, beta, resolution)?;
    Ok(Curve::from_grid(&xs, |x| beta_pdf(x, alpha, beta)))
}

/// Beta CDF at `resolution` evenly spaced scores over [0, 1].
pub fn sample_beta_cdf(alpha: f64, beta: f64, resolution: usize) -> Result<Curve> {
    let xs = checked_grid(alpha, beta, resolution)?;
    Ok(Curve::from_grid(&xs, |x| beta_cdf(x, alpha, beta)))
}

/// Density of one class scaled by its prior, so the two class curves sum
/// to the marginal score density.
pub fn sample_class_density(
    k: f64,
    prior: f64,
    shape: &ShapeModel,
    resolution: usize,
) -> Result<Curve> {
    ensure_unit("prior", prior)?;
    let (alpha, beta) = shape.alpha_beta(k)?;
    let pdf = sample_beta_pdf(alpha, beta, resolution)?;
    Ok(scale(&pdf, prior))
}

fn checked_grid(alpha: f64, beta: f64, resolution: usize) -> Result<Vec<f64>> {
    ensure_shape(alpha, beta)?;
    ensure_resolution(resolution)?;
    Ok(unit_grid(resolution))
}

pub(crate) fn ensure_resolution(resolution: usize) -> Result<()> {
    if resolution < 2 {
        return Err(Error::invalid(
            "resolution",
            format!("must be at least 2, got {}", resolution),
        ));
    }
    Ok(())
}

fn ensure_shape(alpha: f64, beta: f64) -> Result<()> {
    for (name, value) in [("alpha", alpha), ("beta", beta)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::invalid(
                name,
                format!("must be positive and finite, got {}", value),
            ));
        }
    }
    Ok(())
}
