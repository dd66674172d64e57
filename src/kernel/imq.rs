//! Inverse multiquadric kernel: φ(r) = 1 / sqrt(1 + (ep·r)²)

use crate::kernel::rbf::{RadialProfile, RbfKernel};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImqProfile;

impl RadialProfile for ImqProfile {
    fn name(&self) -> String {
        "imq".to_string()
    }

    #[inline]
    fn phi(&self, ep: f64, r: f64) -> f64 {
        1.0 / (1.0 + (ep * r).powi(2)).sqrt()
    }
}

/// Inverse multiquadric kernel
pub type Imq = RbfKernel<ImqProfile>;

impl Imq {
    pub fn new(ep: f64) -> Self {
        Self::with_profile(ep, ImqProfile)
    }
}

impl Default for Imq {
    fn default() -> Self {
        Self::new(1.0)
    }
}
