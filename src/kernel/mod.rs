//! Kernel functions: radial basis functions and the polynomial kernel

pub mod gaussian;
pub mod imq;
pub mod matern;
pub mod polynomial;
pub mod rbf;
pub mod spec;
pub mod traits;
pub mod wendland;

pub use self::gaussian::*;
pub use self::imq::*;
pub use self::matern::{Matern, MaternOrder, MaternProfile};
pub use self::polynomial::*;
pub use self::rbf::*;
pub use self::spec::*;
pub use self::traits::Kernel;
pub use self::wendland::*;
