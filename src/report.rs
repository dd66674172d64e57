//! Kernel profile reports
//!
//! A profile report evaluates a kernel over a one-dimensional grid against a
//! single reference point. This is the data behind a kernel plot; the
//! report can be saved as JSON or written as CSV for external plotting.

use crate::core::{KernelError, PointSet, Result};
use crate::kernel::{Kernel, KernelSpec};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Kernel values over a 1-D grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Kernel label at evaluation time
    pub kernel: String,
    /// Kernel configuration
    pub spec: KernelSpec,
    /// Reference point every grid value is compared against
    pub reference: f64,
    /// Grid coordinates
    pub grid: Vec<f64>,
    /// Kernel value at every grid coordinate
    pub values: Vec<f64>,
    /// Report metadata
    pub metadata: ReportMetadata,
}

/// Report metadata for tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Library version used to create the report
    pub library_version: String,
    /// Creation timestamp
    pub created_at: String,
}

impl ProfileReport {
    /// Build the kernel described by `spec` and evaluate it on every grid
    /// value against `reference`
    ///
    /// # Errors
    /// Returns the build error of `spec`, e.g. `UnimplementedVariant`
    pub fn compute(spec: &KernelSpec, reference: f64, grid: Vec<f64>) -> Result<Self> {
        let kernel = spec.build()?;
        debug!("Profiling {} over {} grid points", kernel.describe(), grid.len());

        let points = PointSet::from_column(&grid);
        let values = kernel
            .evaluate(&points, &PointSet::from_point(&[reference]))
            .into_vec();

        Ok(Self {
            kernel: kernel.describe(),
            spec: spec.clone(),
            reference,
            grid,
            values,
            metadata: ReportMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        })
    }

    /// Save report to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| KernelError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load report from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let report = serde_json::from_reader(reader)
            .map_err(|e| KernelError::SerializationError(e.to_string()))?;
        Ok(report)
    }

    /// Write `x,value` lines preceded by a comment with the kernel label
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "# {}", self.kernel)?;
        writeln!(writer, "x,value")?;
        for (x, value) in self.grid.iter().zip(&self.values) {
            writeln!(writer, "{x},{value}")?;
        }
        Ok(())
    }
}
