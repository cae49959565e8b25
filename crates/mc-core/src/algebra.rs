//! Elementwise operations over curves sampled on the same grid.

use mc_config::ZeroDenominator;

use crate::curve::Curve;
use crate::error::{Error, Result};

/// Multiply every y by `k`; x is unchanged.
pub fn scale(curve: &Curve, k: f64) -> Curve {
    curve.points().iter().map(|&(x, y)| (x, k * y)).collect()
}

/// Pointwise sum. x is taken from `a`.
pub fn add(a: &Curve, b: &Curve) -> Result<Curve> {
    ensure_same_len(a, b)?;
    Ok(a.points()
        .iter()
        .zip(b.points())
        .map(|(&(x, ya), &(_, yb))| (x, ya + yb))
        .collect())
}

/// Pointwise ratio `a / b` with the first and last samples dropped.
///
/// The dropped samples sit on the domain boundaries 0 and 1, where the
/// densities being divided are typically zero. The result has
/// `len - 2` samples (empty for curves shorter than three samples).
/// Interior zero denominators follow `policy`.
pub fn divide(a: &Curve, b: &Curve, policy: ZeroDenominator) -> Result<Curve> {
    ensure_same_len(a, b)?;
    let interior = a.len().saturating_sub(2);
    Ok(a.points()
        .iter()
        .zip(b.points())
        .skip(1)
        .take(interior)
        .map(|(&(x, ya), &(_, yb))| (x, ratio(ya, yb, policy)))
        .collect())
}

fn ratio(num: f64, den: f64, policy: ZeroDenominator) -> f64 {
    match policy {
        ZeroDenominator::Fill { value } if den == 0.0 => value,
        _ => num / den,
    }
}

fn ensure_same_len(a: &Curve, b: &Curve) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
