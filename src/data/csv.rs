//! CSV point set loading
//!
//! Supports loading point sets from CSV files where:
//! - Every column is a coordinate, one point per line
//! - First row can be headers (automatically detected)
//! - Blank lines and lines starting with `#` are skipped

use crate::core::{KernelError, PointSet, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a point set from a CSV reader
pub fn read_points<R: BufRead>(reader: R) -> Result<PointSet> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut first_data_line = true;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if first_data_line {
            first_data_line = false;
            if is_header_line(line) {
                debug!("Skipping CSV header: {line}");
                continue;
            }
        }

        let row = parse_data_line(line)?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(KernelError::DimensionMismatch {
                    expected: first.len(),
                    actual: row.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(KernelError::EmptyPointSet);
    }

    PointSet::from_rows(rows)
}

/// Check if a line appears to be a header
fn is_header_line(line: &str) -> bool {
    let fields: Vec<&str> = line.split(',').collect();
    let non_numeric_count = fields
        .iter()
        .filter(|field| field.trim().parse::<f64>().is_err())
        .count();

    non_numeric_count * 2 > fields.len()
}

/// Parse a CSV data line into coordinates
fn parse_data_line(line: &str) -> Result<Vec<f64>> {
    line.split(',')
        .map(|field| {
            let field = field.trim();
            field
                .parse::<f64>()
                .map_err(|_| KernelError::ParseError(format!("Invalid coordinate: {field}")))
        })
        .collect()
}

impl PointSet {
    /// Load a point set from a CSV file
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        read_points(BufReader::new(file))
    }
}
