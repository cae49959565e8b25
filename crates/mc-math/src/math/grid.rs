//! Evenly spaced sample grids.

/// `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// The last element is exactly `end`. Returns an empty vector for `n == 0`
/// and `[start]` for `n == 1`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            xs[n - 1] = end;
            xs
        }
    }
}

/// Grid of `n` scores covering the unit interval.
pub fn unit_grid(n: usize) -> Vec<f64> {
    linspace(0.0, 1.0, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let xs = unit_grid(500);
        assert_eq!(xs.len(), 500);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[499], 1.0);
    }

    #[test]
    fn strictly_increasing() {
        let xs = linspace(0.0, 1.0, 37);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.25, 1.0, 1), vec![0.25]);
        assert_eq!(unit_grid(2), vec![0.0, 1.0]);
    }

    #[test]
    fn midpoint_of_odd_grid() {
        let xs = unit_grid(5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
