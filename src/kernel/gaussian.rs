//! Gaussian kernels
//!
//! - Gaussian: φ(r) = exp(-(ep·r)²)
//! - GaussianTanh: φ(r) = exp(-(ep·tanh(r))²), whose distance saturates at 1
//!   so the kernel never decays below exp(-ep²)

use crate::kernel::rbf::{RadialProfile, RbfKernel};

/// Profile exp(-(ep·r)²)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaussianProfile;

impl RadialProfile for GaussianProfile {
    fn name(&self) -> String {
        "gauss".to_string()
    }

    #[inline]
    fn phi(&self, ep: f64, r: f64) -> f64 {
        (-(ep * r).powi(2)).exp()
    }
}

/// Gaussian kernel: K(x, y) = exp(-(ep·||x - y||)²)
pub type Gaussian = RbfKernel<GaussianProfile>;

impl Gaussian {
    /// Create a Gaussian kernel with shape parameter `ep`
    ///
    /// # Examples
    /// ```
    /// use rbf_kernels::kernel::{Gaussian, Kernel};
    ///
    /// let kernel = Gaussian::new(2.5);
    /// assert_eq!(kernel.describe(), "gauss [gamma = 2.50e+00]");
    /// ```
    pub fn new(ep: f64) -> Self {
        Self::with_profile(ep, GaussianProfile)
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Profile exp(-(ep·tanh(r))²)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaussianTanhProfile;

impl RadialProfile for GaussianTanhProfile {
    fn name(&self) -> String {
        "gauss_tanh".to_string()
    }

    #[inline]
    fn phi(&self, ep: f64, r: f64) -> f64 {
        (-(ep * r.tanh()).powi(2)).exp()
    }
}

/// Gaussian kernel over tanh-compressed distances
pub type GaussianTanh = RbfKernel<GaussianTanhProfile>;

impl GaussianTanh {
    pub fn new(ep: f64) -> Self {
        Self::with_profile(ep, GaussianTanhProfile)
    }
}

impl Default for GaussianTanh {
    fn default() -> Self {
        Self::new(1.0)
    }
}
