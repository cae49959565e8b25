//! Sampled curves over the score axis.

use serde::{Deserialize, Serialize};

/// Ordered `(x, y)` samples with strictly increasing x.
///
/// Serializes as an array of `[x, y]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Pair each grid score with a value.
    pub fn from_grid<F>(xs: &[f64], mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self {
            points: xs.iter().map(|&x| (x, f(x))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        self.points.get(index).copied()
    }

    /// Index of the last sample, or None for an empty curve.
    pub fn last_index(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

impl FromIterator<(f64, f64)> for Curve {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// The curves the engine derives on every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    NegClassDensity,
    PosClassDensity,
    MarginalDensity,
    Calibration,
    Cost,
}

impl CurveKind {
    pub const ALL: [CurveKind; 5] = [
        CurveKind::NegClassDensity,
        CurveKind::PosClassDensity,
        CurveKind::MarginalDensity,
        CurveKind::Calibration,
        CurveKind::Cost,
    ];

    /// Stable element id for renderers.
    pub fn id(&self) -> &'static str {
        match self {
            CurveKind::NegClassDensity => "curve-neg-class",
            CurveKind::PosClassDensity => "curve-pos-class",
            CurveKind::MarginalDensity => "curve-dist",
            CurveKind::Calibration => "calibration-curve",
            CurveKind::Cost => "curve-cost",
        }
    }

    /// TeX label shown next to the curve.
    pub fn equation(&self) -> &'static str {
        match self {
            CurveKind::NegClassDensity => "f(s | y = 0)",
            CurveKind::PosClassDensity => "f(s | y = 1)",
            CurveKind::MarginalDensity => "f(s)",
            CurveKind::Calibration => "P(s) := \\frac{f(s | y = 1)}{f(s)}",
            CurveKind::Cost => "C(t = s)",
        }
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// TeX label of the optimal-threshold formula.
pub const OPTIMAL_THRESHOLD_EQUATION: &str =
    "P(\\tau) = \\frac{k_{FP} + k_{TN} + k_{rev}}{k_{FP} + k_{FN} + k_{TN} + k_{TP}}";
