//! Point set loading
//!
//! This module reads point sets from the text formats used by callers of
//! the kernels.

pub mod csv;

pub use self::csv::read_points;
