//! Radial basis function and polynomial kernel matrices
//!
//! Kernels evaluate pairwise similarity matrices between two point sets:
//! Gaussian, Gaussian-tanh, inverse multiquadric, Matérn, compactly
//! supported Wendland, and polynomial. All of them implement the
//! [`Kernel`] trait and are interchangeable in downstream numerical code.
//!
//! ```
//! use rbf_kernels::{Gaussian, Kernel, PointSet};
//!
//! let x = PointSet::from_rows(vec![vec![0.0], vec![1.0]]).unwrap();
//! let kernel = Gaussian::new(1.0);
//! let k = kernel.evaluate(&x, &x);
//! assert_eq!(k.diagonal(), kernel.diagonal(&x));
//! ```

pub mod core;
pub mod data;
pub mod kernel;
pub mod report;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::{KernelError, KernelMatrix, PointSet, Result};
pub use crate::kernel::{
    Gaussian, GaussianTanh, Imq, Kernel, KernelSpec, Matern, MaternOrder, Polynomial,
    RadialProfile, RbfKernel, Wendland, WendlandOrder,
};
pub use crate::report::ProfileReport;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
