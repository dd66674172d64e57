//! Wendland compactly supported kernels
//!
//! For order k and space dimension d the profile is
//!
//! φ(r) = max(1 - x, 0)^e · P_k(x) / c,  x = ep·r
//!
//! with l = ⌊d/2⌋ + k + 1, e = l + k and c = (l + 2k)! / l!. P_k is chosen so
//! that φ and its first k derivatives vanish at x = 1, giving a C^{2k}
//! kernel that is exactly zero outside the support radius 1/ep.

use crate::core::{KernelError, Result};
use crate::kernel::matern::horner;
use crate::kernel::rbf::{RadialProfile, RbfKernel};
use log::debug;
use std::num::NonZeroUsize;

/// Supported Wendland smoothness orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WendlandOrder {
    Zero,
    One,
    Two,
    Three,
    Four,
}

impl WendlandOrder {
    pub fn as_usize(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Coefficients of P_k for a given l, lowest degree first
    fn coefficients(self, l: f64) -> Vec<f64> {
        match self {
            Self::Zero => vec![1.0],
            Self::One => vec![1.0, l + 1.0],
            Self::Two => vec![3.0, 3.0 * (l + 2.0), (l + 3.0) * (l + 1.0)],
            Self::Three => vec![
                15.0,
                15.0 * (l + 3.0),
                45.0 + 6.0 * l * (l + 6.0),
                (l + 5.0) * (l + 3.0) * (l + 1.0),
            ],
            Self::Four => vec![
                105.0,
                105.0 * (l + 4.0),
                45.0 * (14.0 + l * (l + 8.0)),
                5.0 * (l + 4.0) * (21.0 + 2.0 * l * (8.0 + l)),
                (l + 7.0) * (l + 5.0) * (l + 3.0) * (l + 1.0),
            ],
        }
    }
}

impl TryFrom<usize> for WendlandOrder {
    type Error = KernelError;

    fn try_from(k: usize) -> Result<Self> {
        match k {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(KernelError::UnimplementedVariant {
                family: "Wendland",
                order: k,
            }),
        }
    }
}

/// Wendland profile with its derived constants computed once
#[derive(Debug, Clone, PartialEq)]
pub struct WendlandProfile {
    order: WendlandOrder,
    dim: usize,
    l: usize,
    exponent: i32,
    normalizer: f64,
    coefficients: Vec<f64>,
}

impl WendlandProfile {
    /// Derive l, e, c and P_k for order `order` in dimension `dim`
    pub fn new(order: WendlandOrder, dim: usize) -> Result<Self> {
        let dim = NonZeroUsize::new(dim).ok_or_else(|| {
            KernelError::InvalidParameter("Wendland dimension must be at least 1".to_string())
        })?;
        Ok(Self::derive(order, dim))
    }

    fn derive(order: WendlandOrder, dim: NonZeroUsize) -> Self {
        let dim = dim.get();
        let k = order.as_usize();
        let l = dim / 2 + k + 1;
        let exponent = (l + k) as i32;
        // (l + 2k)! / l! as the product (l + 1) ... (l + 2k)
        let normalizer = (l + 1..=l + 2 * k).map(|i| i as f64).product::<f64>();
        let coefficients = order.coefficients(l as f64);

        debug!(
            "wen_{}_{}: l = {}, e = {}, c = {}",
            dim, k, l, exponent, normalizer
        );

        Self {
            order,
            dim,
            l,
            exponent,
            normalizer,
            coefficients,
        }
    }

    pub fn order(&self) -> WendlandOrder {
        self.order
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// l = ⌊d/2⌋ + k + 1
    pub fn l(&self) -> usize {
        self.l
    }

    /// e = l + k
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// c = (l + 2k)! / l!
    pub fn normalizer(&self) -> f64 {
        self.normalizer
    }
}

impl RadialProfile for WendlandProfile {
    fn name(&self) -> String {
        format!("wen_{}_{}", self.dim, self.order.as_usize())
    }

    #[inline]
    fn phi(&self, ep: f64, r: f64) -> f64 {
        let x = ep * r;
        let base = 1.0 - x;
        if base <= 0.0 {
            return 0.0;
        }
        base.powi(self.exponent) * horner(&self.coefficients, x) / self.normalizer
    }
}

/// Wendland kernel of order 0 to 4
pub type Wendland = RbfKernel<WendlandProfile>;

impl Wendland {
    /// Create a Wendland kernel with shape parameter `ep`, order `k` and
    /// space dimension `d`
    ///
    /// # Errors
    /// Returns `UnimplementedVariant` for `k > 4` and `InvalidParameter`
    /// for `d == 0`
    ///
    /// # Examples
    /// ```
    /// use rbf_kernels::kernel::{Kernel, Wendland};
    ///
    /// let kernel = Wendland::new(1.0, 1, 3).unwrap();
    /// assert_eq!(kernel.name(), "wen_3_1");
    /// assert!(Wendland::new(1.0, 5, 1).is_err());
    /// ```
    pub fn new(ep: f64, k: usize, d: usize) -> Result<Self> {
        let order = WendlandOrder::try_from(k)?;
        Ok(Self::with_profile(ep, WendlandProfile::new(order, d)?))
    }

    pub fn order(&self) -> WendlandOrder {
        self.profile().order()
    }

    pub fn dim(&self) -> usize {
        self.profile().dim()
    }

    /// Distance beyond which the kernel is exactly zero
    pub fn support_radius(&self) -> f64 {
        1.0 / self.ep()
    }
}

impl Default for Wendland {
    fn default() -> Self {
        Self::with_profile(
            1.0,
            WendlandProfile::derive(WendlandOrder::Zero, NonZeroUsize::MIN),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointSet;
    use crate::kernel::Kernel;
    use approx::assert_relative_eq;

    #[test]
    fn test_wendland_derived_constants() {
        let p = WendlandProfile::new(WendlandOrder::One, 1).unwrap();
        assert_eq!(p.l(), 2);
        assert_eq!(p.exponent(), 3);
        assert_eq!(p.normalizer(), 12.0);

        let p = WendlandProfile::new(WendlandOrder::Two, 3).unwrap();
        assert_eq!(p.l(), 4);
        assert_eq!(p.exponent(), 6);
        assert_eq!(p.normalizer(), 1680.0);

        let p = WendlandProfile::new(WendlandOrder::Zero, 5).unwrap();
        assert_eq!(p.l(), 3);
        assert_eq!(p.exponent(), 3);
        assert_eq!(p.normalizer(), 1.0);
    }

    #[test]
    fn test_wendland_default_matches_constructor() {
        assert_eq!(Wendland::default(), Wendland::new(1.0, 0, 1).unwrap());
    }

    #[test]
    fn test_wendland_default_uses_derived_constants() {
        let kernel = Wendland::default();
        let profile = kernel.profile();
        assert_eq!(profile.l(), 1);
        assert_eq!(profile.exponent(), 1);
        assert_eq!(profile.normalizer(), 1.0);
        assert_eq!(kernel.name(), "wen_1_0");

        for k in 0..5 {
            let order = WendlandOrder::try_from(k).unwrap();
            for d in 1..6 {
                let dim = NonZeroUsize::new(d).unwrap();
                assert_eq!(
                    WendlandProfile::derive(order, dim),
                    WendlandProfile::new(order, d).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_wendland_order_zero_is_tent() {
        // d = 1, k = 0: l = 1, e = 1, c = 1
        let kernel = Wendland::new(1.0, 0, 1).unwrap();
        assert_eq!(kernel.phi(0.0), 1.0);
        assert_relative_eq!(kernel.phi(0.25), 0.75, epsilon = 1e-15);
    }

    #[test]
    fn test_wendland_classical_forms_in_3d() {
        let r: f64 = 0.3;
        let ep = 1.0;

        // φ_{3,1} ∝ (1 - r)^4 (4r + 1)
        let kernel = Wendland::new(ep, 1, 3).unwrap();
        let expected = (1.0 - r).powi(4) * (4.0 * r + 1.0) / 20.0;
        assert_relative_eq!(kernel.phi(r), expected, epsilon = 1e-15);

        // φ_{3,2} ∝ (1 - r)^6 (35r² + 18r + 3)
        let kernel = Wendland::new(ep, 2, 3).unwrap();
        let expected = (1.0 - r).powi(6) * (35.0 * r * r + 18.0 * r + 3.0) / 1680.0;
        assert_relative_eq!(kernel.phi(r), expected, epsilon = 1e-15);

        // φ_{3,3} ∝ (1 - r)^8 (32r³ + 25r² + 8r + 1)
        let kernel = Wendland::new(ep, 3, 3).unwrap();
        let c = (6..=11).map(|i| i as f64).product::<f64>();
        let expected =
            (1.0 - r).powi(8) * 15.0 * (32.0 * r.powi(3) + 25.0 * r * r + 8.0 * r + 1.0) / c;
        assert_relative_eq!(kernel.phi(r), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_wendland_order_four() {
        // d = 2: l = 1 + 4 + 1 = 6, e = 10, c = 14! / 6!
        let kernel = Wendland::new(1.0, 4, 2).unwrap();
        let l = 6.0;
        let x: f64 = 0.4;
        let p = 13.0 * 11.0 * 9.0 * 7.0 * x.powi(4)
            + 5.0 * (l + 4.0) * (21.0 + 2.0 * l * (8.0 + l)) * x.powi(3)
            + 45.0 * (14.0 + l * (l + 8.0)) * x * x
            + 105.0 * (l + 4.0) * x
            + 105.0;
        let c = (7..=14).map(|i| i as f64).product::<f64>();
        let expected = (1.0 - x).powi(10) * p / c;
        assert_relative_eq!(kernel.phi(x), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_wendland_compact_support() {
        for k in 0..5 {
            for d in 1..4 {
                let kernel = Wendland::new(2.0, k, d).unwrap();
                assert_eq!(kernel.phi(0.5), 0.0);
                assert_eq!(kernel.phi(0.75), 0.0);
                assert_eq!(kernel.phi(1e6), 0.0);
                assert!(kernel.phi(0.49) > 0.0);
            }
        }
    }

    #[test]
    fn test_wendland_smooth_at_boundary() {
        let h = 1e-4;
        for k in 1..5 {
            let kernel = Wendland::new(1.0, k, 1).unwrap();
            // Slope into the boundary vanishes for k >= 1
            let slope = kernel.phi(1.0 - h) / h;
            assert!(slope.abs() < 1e-6, "k = {k}: slope {slope}");
        }
    }

    #[test]
    fn test_wendland_at_zero() {
        for k in 0..5 {
            for d in 1..6 {
                let kernel = Wendland::new(0.7, k, d).unwrap();
                let p0 = [1.0, 1.0, 3.0, 15.0, 105.0][k];
                assert_relative_eq!(
                    kernel.phi(0.0),
                    p0 / kernel.profile().normalizer(),
                    epsilon = 1e-15
                );
            }
        }
    }

    #[test]
    fn test_wendland_unsupported() {
        assert!(matches!(
            Wendland::new(1.0, 5, 1),
            Err(KernelError::UnimplementedVariant {
                family: "Wendland",
                order: 5
            })
        ));
        assert!(matches!(
            Wendland::new(1.0, 1, 0),
            Err(KernelError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_wendland_name_and_accessors() {
        let kernel = Wendland::new(4.0, 2, 3).unwrap();
        assert_eq!(kernel.name(), "wen_3_2");
        assert_eq!(kernel.describe(), "wen_3_2 [gamma = 4.00e+00]");
        assert_eq!(kernel.order(), WendlandOrder::Two);
        assert_eq!(kernel.dim(), 3);
        assert_eq!(kernel.support_radius(), 0.25);
    }

    #[test]
    fn test_wendland_sparse_matrix() {
        let kernel = Wendland::new(1.0, 1, 2).unwrap();
        let x = PointSet::from_rows(vec![vec![0.0, 0.0], vec![0.5, 0.0], vec![3.0, 3.0]]).unwrap();
        let k = kernel.evaluate(&x, &x);

        assert_eq!(k.get(0, 2), 0.0);
        assert_eq!(k.get(2, 1), 0.0);
        assert!(k.get(0, 1) > 0.0);
        assert_eq!(k.diagonal(), kernel.diagonal(&x));
    }
}
