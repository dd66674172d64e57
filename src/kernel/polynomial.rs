//! Polynomial Kernel Implementation
//!
//! The polynomial kernel is defined as:
//! K(x, y) = (<x, y> + a)^p
//!
//! Where:
//! - a: additive offset applied to the inner product
//! - p: real exponent, applied with `powf`
//!
//! Common configurations:
//! - Linear kernel: a=0, p=1
//! - Quadratic kernel: a=1, p=2

use crate::core::{KernelMatrix, PointSet, Result};
use crate::kernel::traits::{check_arity, Kernel};
use crate::utils::distance::inner_product_matrix;
use crate::utils::format::sci;
use log::trace;
use std::fmt;

/// Polynomial kernel with additive offset and exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    /// Offset added to the inner product (default: 0.0)
    pub a: f64,
    /// Exponent (default: 1.0)
    pub p: f64,
}

impl Polynomial {
    /// Creates a new polynomial kernel (<x, y> + a)^p
    ///
    /// # Examples
    /// ```
    /// use rbf_kernels::kernel::{Kernel, Polynomial};
    ///
    /// let kernel = Polynomial::new(1.0, 2.0);
    /// assert_eq!(kernel.describe(), "polynomial [a = 1.00e+00, p = 2.00e+00]");
    /// ```
    pub fn new(a: f64, p: f64) -> Self {
        Self { a, p }
    }

    /// Overwrite both parameters
    pub fn set_params(&mut self, a: f64, p: f64) {
        self.a = a;
        self.p = p;
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Kernel for Polynomial {
    fn name(&self) -> String {
        "polynomial".to_string()
    }

    fn evaluate(&self, x: &PointSet, y: &PointSet) -> KernelMatrix {
        trace!("polynomial: evaluating {}x{} kernel matrix", x.len(), y.len());
        let Self { a, p } = *self;
        inner_product_matrix(x, y).map(|g| (g + a).powf(p))
    }

    /// (||x_i|| + a)^p
    ///
    /// Uses the plain norm, not the squared norm, so this is not the
    /// diagonal of `evaluate(x, x)` unless every point has norm 0 or 1.
    fn diagonal(&self, x: &PointSet) -> Vec<f64> {
        x.norms()
            .into_iter()
            .map(|norm| (norm + self.a).powf(self.p))
            .collect()
    }

    fn describe(&self) -> String {
        format!("polynomial [a = {}, p = {}]", sci(self.a), sci(self.p))
    }

    /// [a, p]
    fn parameters(&self) -> Vec<f64> {
        vec![self.a, self.p]
    }

    fn set_parameters(&mut self, params: &[f64]) -> Result<()> {
        check_arity("polynomial", params, 2)?;
        self.set_params(params[0], params[1]);
        Ok(())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
