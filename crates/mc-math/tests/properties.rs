//! Property-based tests for mc-math numerical functions.
//!
//! Uses proptest to verify distribution properties hold across the
//! parameter range the engine samples.

use mc_math::{beta_cdf, beta_pdf, log_beta, unit_grid};
use proptest::prelude::*;

/// Tolerance for floating point comparisons.
const TOL: f64 = 1e-10;

/// Helper to check approximate equality.
fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() <= tol.max(tol * a.abs().max(b.abs()))
}

// ============================================================================
// Beta PDF properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The density is never negative on the unit interval.
    #[test]
    fn pdf_non_negative(alpha in 1.0..13.0f64, beta in 1.0..13.0f64, x in 0.0..=1.0f64) {
        let pdf = beta_pdf(x, alpha, beta);
        prop_assert!(pdf >= 0.0, "pdf({}; {}, {}) = {}", x, alpha, beta, pdf);
    }

    /// Swapping the shapes mirrors the density around one half.
    #[test]
    fn pdf_mirror_symmetry(alpha in 1.0..13.0f64, beta in 1.0..13.0f64, x in 0.01..0.99f64) {
        let left = beta_pdf(x, alpha, beta);
        let right = beta_pdf(1.0 - x, beta, alpha);
        prop_assert!(approx_eq(left, right, 1e-9), "{} vs {}", left, right);
    }

    /// A trapezoid over a fine grid integrates the density to one.
    #[test]
    fn pdf_integrates_to_one(alpha in 1.5..12.5f64, beta in 1.5..12.5f64) {
        let xs = unit_grid(2001);
        let h = 1.0 / 2000.0;
        let mut total = 0.0;
        for w in xs.windows(2) {
            total += 0.5 * h * (beta_pdf(w[0], alpha, beta) + beta_pdf(w[1], alpha, beta));
        }
        prop_assert!((total - 1.0).abs() < 1e-3, "integral = {}", total);
    }
}

// ============================================================================
// Beta CDF properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The CDF is non-decreasing over the grid, starts at 0 and ends at 1.
    #[test]
    fn cdf_monotone_with_exact_endpoints(alpha in 1.0..13.0f64, beta in 1.0..13.0f64, n in 2usize..600) {
        let xs = unit_grid(n);
        let values: Vec<f64> = xs.iter().map(|&x| beta_cdf(x, alpha, beta)).collect();
        prop_assert_eq!(values[0], 0.0);
        prop_assert_eq!(values[n - 1], 1.0);
        for w in values.windows(2) {
            prop_assert!(w[1] >= w[0] - TOL, "cdf decreased: {} -> {}", w[0], w[1]);
        }
    }

    /// I_x(a, b) = 1 - I_{1-x}(b, a).
    #[test]
    fn cdf_reflection(alpha in 1.0..13.0f64, beta in 1.0..13.0f64, x in 0.0..=1.0f64) {
        let direct = beta_cdf(x, alpha, beta);
        let reflected = 1.0 - beta_cdf(1.0 - x, beta, alpha);
        prop_assert!(approx_eq(direct, reflected, 1e-9), "{} vs {}", direct, reflected);
    }

    /// The CDF stays inside [0, 1].
    #[test]
    fn cdf_bounded(alpha in 0.5..20.0f64, beta in 0.5..20.0f64, x in -0.5..1.5f64) {
        let cdf = beta_cdf(x, alpha, beta);
        prop_assert!((0.0..=1.0).contains(&cdf), "cdf = {}", cdf);
    }
}

// ============================================================================
// log_beta properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// B(a, b) = B(b, a).
    #[test]
    fn log_beta_symmetric(a in 0.1..50.0f64, b in 0.1..50.0f64) {
        prop_assert!(approx_eq(log_beta(a, b), log_beta(b, a), TOL));
    }

    /// B(a + 1, b) = B(a, b) * a / (a + b).
    #[test]
    fn log_beta_recurrence(a in 0.5..30.0f64, b in 0.5..30.0f64) {
        let lhs = log_beta(a + 1.0, b);
        let rhs = log_beta(a, b) + (a / (a + b)).ln();
        prop_assert!(approx_eq(lhs, rhs, 1e-9), "{} vs {}", lhs, rhs);
    }
}
