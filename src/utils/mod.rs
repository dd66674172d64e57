//! Numeric helpers shared by the kernel implementations

/// Pairwise distances and inner products between point sets
pub mod distance {
    use crate::core::{KernelMatrix, PointSet};

    /// Euclidean distance between two points of equal dimension
    #[inline]
    pub fn euclidean(x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product of two points of equal dimension
    #[inline]
    pub fn dot(x: &[f64], y: &[f64]) -> f64 {
        x.iter().zip(y).map(|(a, b)| a * b).sum()
    }

    /// Assert that two point sets can be compared
    ///
    /// # Panics
    /// Panics if both sets are non-empty and their dimensions differ
    pub fn assert_same_dim(x: &PointSet, y: &PointSet) {
        assert!(
            x.is_empty() || y.is_empty() || x.dim() == y.dim(),
            "Point dimension mismatch: {} vs {}",
            x.dim(),
            y.dim()
        );
    }

    /// M×N matrix of Euclidean distances between the rows of `x` and `y`
    ///
    /// # Panics
    /// Panics if the point dimensions differ
    pub fn distance_matrix(x: &PointSet, y: &PointSet) -> KernelMatrix {
        assert_same_dim(x, y);
        KernelMatrix::from_fn(x.len(), y.len(), |i, j| euclidean(x.row(i), y.row(j)))
    }

    /// M×N matrix of inner products `x · yᵀ`
    ///
    /// # Panics
    /// Panics if the point dimensions differ
    pub fn inner_product_matrix(x: &PointSet, y: &PointSet) -> KernelMatrix {
        assert_same_dim(x, y);
        KernelMatrix::from_fn(x.len(), y.len(), |i, j| dot(x.row(i), y.row(j)))
    }
}

/// Evaluation grids
pub mod grid {
    /// `n` evenly spaced values from `start` to `end`, both included
    pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                    .collect()
            }
        }
    }
}

/// Number formatting for kernel labels
pub mod format {
    /// Scientific notation with a two-decimal mantissa and a signed,
    /// at least two-digit exponent: `2.5` -> `2.50e+00`
    pub fn sci(value: f64) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }

        let raw = format!("{value:.2e}");
        match raw.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.abs())
            }
            None => raw,
        }
    }
}
