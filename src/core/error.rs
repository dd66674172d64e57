//! Error types for kernel construction and point loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Unimplemented variant: {family} kernel of order {order} is not available")]
    UnimplementedVariant { family: &'static str, order: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty point set")]
    EmptyPointSet,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;
