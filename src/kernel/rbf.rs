//! Shared evaluation logic for radial basis function kernels
//!
//! An RBF kernel depends only on the distance between two points:
//! K(x, y) = φ(ep, ||x - y||)
//! where ep is the shape parameter scaling the distance. Every concrete RBF
//! supplies the profile φ through [`RadialProfile`]; distance matrices, the
//! diagonal shortcut, labels and parameter updates live here once.

use crate::core::{KernelMatrix, PointSet, Result};
use crate::kernel::traits::{check_arity, Kernel};
use crate::utils::distance::distance_matrix;
use crate::utils::format::sci;
use log::trace;
use std::fmt;

/// Scalar profile of a radial kernel
pub trait RadialProfile: Clone + fmt::Debug + Send + Sync {
    /// Family tag used in labels
    fn name(&self) -> String;

    /// Profile value for shape parameter `ep` at distance `r >= 0`
    fn phi(&self, ep: f64, r: f64) -> f64;
}

/// Radial kernel holding the shape parameter and its profile
#[derive(Debug, Clone, PartialEq)]
pub struct RbfKernel<P> {
    ep: f64,
    profile: P,
}

impl<P: RadialProfile> RbfKernel<P> {
    /// Create a radial kernel from a shape parameter and a profile
    pub fn with_profile(ep: f64, profile: P) -> Self {
        Self { ep, profile }
    }

    /// Get the shape parameter
    pub fn ep(&self) -> f64 {
        self.ep
    }

    /// Overwrite the shape parameter
    pub fn set_ep(&mut self, ep: f64) {
        self.ep = ep;
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    /// Profile value at distance `r` with the current shape parameter
    #[inline]
    pub fn phi(&self, r: f64) -> f64 {
        self.profile.phi(self.ep, r)
    }
}

impl<P: RadialProfile> Kernel for RbfKernel<P> {
    fn name(&self) -> String {
        self.profile.name()
    }

    fn evaluate(&self, x: &PointSet, y: &PointSet) -> KernelMatrix {
        trace!(
            "{}: evaluating {}x{} kernel matrix",
            self.profile.name(),
            x.len(),
            y.len()
        );
        let ep = self.ep;
        let profile = &self.profile;
        distance_matrix(x, y).map(|r| profile.phi(ep, r))
    }

    fn diagonal(&self, x: &PointSet) -> Vec<f64> {
        // Self-distance is always zero
        vec![self.phi(0.0); x.len()]
    }

    fn describe(&self) -> String {
        format!("{} [gamma = {}]", self.profile.name(), sci(self.ep))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.ep]
    }

    fn set_parameters(&mut self, params: &[f64]) -> Result<()> {
        check_arity(&self.profile.name(), params, 1)?;
        self.ep = params[0];
        Ok(())
    }
}

impl<P: RadialProfile> fmt::Display for RbfKernel<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
