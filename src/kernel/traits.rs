//! Kernel trait definition

use crate::core::{KernelMatrix, PointSet, Result};

/// Kernel function trait
///
/// Every kernel maps a pair of point sets to a matrix of pairwise values and
/// exposes a closed-form shortcut for the diagonal of `evaluate(X, X)`.
/// The trait is object safe so kernels can be chosen at runtime as
/// `Box<dyn Kernel>`.
///
/// Kernels are `Send + Sync`: evaluation takes `&self` and is safe to run
/// concurrently. Updating parameters takes `&mut self`; callers that share
/// one instance across threads and mutate it must serialize access
/// themselves (e.g. behind a `Mutex`).
pub trait Kernel: Send + Sync {
    /// Family tag, e.g. `gauss`, `mat2`, `wen_3_1`, `polynomial`
    fn name(&self) -> String;

    /// Kernel matrix K[i][j] = k(x_i, y_j), of shape `x.len()` × `y.len()`
    ///
    /// # Panics
    /// Panics if the two point sets have different dimensions
    fn evaluate(&self, x: &PointSet, y: &PointSet) -> KernelMatrix;

    /// Diagonal of `evaluate(x, x)` without computing off-diagonal entries
    fn diagonal(&self, x: &PointSet) -> Vec<f64>;

    /// Human-readable label with the current parameter values
    fn describe(&self) -> String;

    /// Current mutable parameters, in the order `set_parameters` expects
    fn parameters(&self) -> Vec<f64>;

    /// Replace the mutable parameters in place
    ///
    /// Returns `InvalidParameter` and leaves the kernel untouched when the
    /// slice length does not match `parameters().len()`.
    fn set_parameters(&mut self, params: &[f64]) -> Result<()>;
}

/// Reject a parameter slice whose length differs from `expected`
pub(crate) fn check_arity(kernel: &str, params: &[f64], expected: usize) -> Result<()> {
    if params.len() != expected {
        return Err(crate::core::KernelError::InvalidParameter(format!(
            "{kernel} takes {expected} parameter(s), got {}",
            params.len()
        )));
    }
    Ok(())
}
