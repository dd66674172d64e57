//! Matérn kernels of half-integer smoothness
//!
//! φ(r) = exp(-x) · P_k(x), x = ep·r, with
//! - P_0 = 1
//! - P_1 = 1 + x
//! - P_2 = 3 + 3x + x²
//! - P_3 = 15 + 15x + 6x² + x³
//!
//! The polynomials are not normalized: φ(0) = P_k(0), i.e. 1, 1, 3, 15.
//! Once exp(-x) underflows to zero the profile is exactly zero, even where
//! P_k(x) overflows.

use crate::core::{KernelError, Result};
use crate::kernel::rbf::{RadialProfile, RbfKernel};

/// Supported Matérn smoothness orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaternOrder {
    Zero,
    One,
    Two,
    Three,
}

impl MaternOrder {
    pub fn as_usize(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Coefficients of P_k, lowest degree first
    fn coefficients(self) -> &'static [f64] {
        match self {
            Self::Zero => &[1.0],
            Self::One => &[1.0, 1.0],
            Self::Two => &[3.0, 3.0, 1.0],
            Self::Three => &[15.0, 15.0, 6.0, 1.0],
        }
    }
}

impl TryFrom<usize> for MaternOrder {
    type Error = KernelError;

    fn try_from(k: usize) -> Result<Self> {
        match k {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(KernelError::UnimplementedVariant {
                family: "Matern",
                order: k,
            }),
        }
    }
}

/// Profile exp(-ep·r) · P_k(ep·r)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaternProfile {
    order: MaternOrder,
}

impl MaternProfile {
    pub fn new(order: MaternOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> MaternOrder {
        self.order
    }
}

impl RadialProfile for MaternProfile {
    fn name(&self) -> String {
        format!("mat{}", self.order.as_usize())
    }

    #[inline]
    fn phi(&self, ep: f64, r: f64) -> f64 {
        let x = ep * r;
        let decay = (-x).exp();
        if decay == 0.0 {
            return 0.0;
        }
        decay * horner(self.order.coefficients(), x)
    }
}

/// Evaluate a polynomial given its coefficients, lowest degree first
#[inline]
pub(crate) fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Matérn kernel of order 0 to 3
pub type Matern = RbfKernel<MaternProfile>;

impl Matern {
    /// Create a Matérn kernel with shape parameter `ep` and order `k`
    ///
    /// # Errors
    /// Returns `UnimplementedVariant` for `k > 3`
    ///
    /// # Examples
    /// ```
    /// use rbf_kernels::kernel::{Kernel, Matern};
    ///
    /// let kernel = Matern::new(1.0, 2).unwrap();
    /// assert_eq!(kernel.name(), "mat2");
    /// assert!(Matern::new(1.0, 4).is_err());
    /// ```
    pub fn new(ep: f64, k: usize) -> Result<Self> {
        let order = MaternOrder::try_from(k)?;
        Ok(Self::with_order(ep, order))
    }

    /// Create a Matérn kernel from an already validated order
    pub fn with_order(ep: f64, order: MaternOrder) -> Self {
        Self::with_profile(ep, MaternProfile::new(order))
    }

    pub fn order(&self) -> MaternOrder {
        self.profile().order()
    }
}

impl Default for Matern {
    fn default() -> Self {
        Self::with_order(1.0, MaternOrder::Zero)
    }
}
