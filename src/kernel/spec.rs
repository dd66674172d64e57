//! Serializable kernel configuration
//!
//! A [`KernelSpec`] names a kernel family and its parameters. It can be
//! parsed from a family tag (`gauss`, `gauss_tanh`, `imq`, `mat0`..`mat3`,
//! `wen_<d>_<k>`, `polynomial`), stored as JSON, and built into a boxed
//! [`Kernel`] chosen at runtime.

use crate::core::{KernelError, Result};
use crate::kernel::{Gaussian, GaussianTanh, Imq, Kernel, Matern, Polynomial, Wendland};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kernel family and parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum KernelSpec {
    Gauss { ep: f64 },
    GaussTanh { ep: f64 },
    Imq { ep: f64 },
    Matern { ep: f64, k: usize },
    Wendland { ep: f64, k: usize, d: usize },
    Polynomial { a: f64, p: f64 },
}

impl KernelSpec {
    /// Family tag, identical to `name()` of the built kernel
    pub fn tag(&self) -> String {
        match self {
            Self::Gauss { .. } => "gauss".to_string(),
            Self::GaussTanh { .. } => "gauss_tanh".to_string(),
            Self::Imq { .. } => "imq".to_string(),
            Self::Matern { k, .. } => format!("mat{k}"),
            Self::Wendland { k, d, .. } => format!("wen_{d}_{k}"),
            Self::Polynomial { .. } => "polynomial".to_string(),
        }
    }

    /// Whether the family depends on distance only
    pub fn is_radial(&self) -> bool {
        !matches!(self, Self::Polynomial { .. })
    }

    /// Construct the kernel described by this spec
    ///
    /// # Errors
    /// `UnimplementedVariant` for unsupported Matérn/Wendland orders and
    /// `InvalidParameter` for a zero Wendland dimension
    pub fn build(&self) -> Result<Box<dyn Kernel>> {
        debug!("Building kernel from spec {self:?}");
        let kernel: Box<dyn Kernel> = match *self {
            Self::Gauss { ep } => Box::new(Gaussian::new(ep)),
            Self::GaussTanh { ep } => Box::new(GaussianTanh::new(ep)),
            Self::Imq { ep } => Box::new(Imq::new(ep)),
            Self::Matern { ep, k } => Box::new(Matern::new(ep, k)?),
            Self::Wendland { ep, k, d } => Box::new(Wendland::new(ep, k, d)?),
            Self::Polynomial { a, p } => Box::new(Polynomial::new(a, p)),
        };
        Ok(kernel)
    }
}

impl fmt::Display for KernelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for KernelSpec {
    type Err = KernelError;

    /// Parse a family tag; parameters take their default values
    /// (`ep = 1`, `a = 0`, `p = 1`)
    fn from_str(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        let invalid = || KernelError::ParseError(format!("Unknown kernel tag: {tag}"));
        let parse_index = |s: &str| s.parse::<usize>().map_err(|_| invalid());

        match tag {
            "gauss" => Ok(Self::Gauss { ep: 1.0 }),
            "gauss_tanh" => Ok(Self::GaussTanh { ep: 1.0 }),
            "imq" => Ok(Self::Imq { ep: 1.0 }),
            "polynomial" => Ok(Self::Polynomial { a: 0.0, p: 1.0 }),
            _ => {
                if let Some(k) = tag.strip_prefix("mat") {
                    Ok(Self::Matern {
                        ep: 1.0,
                        k: parse_index(k)?,
                    })
                } else if let Some(rest) = tag.strip_prefix("wen_") {
                    let (d, k) = rest.split_once('_').ok_or_else(invalid)?;
                    Ok(Self::Wendland {
                        ep: 1.0,
                        k: parse_index(k)?,
                        d: parse_index(d)?,
                    })
                } else {
                    Err(invalid())
                }
            }
        }
    }
}
