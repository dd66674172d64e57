//! Core types and errors shared by every kernel

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
