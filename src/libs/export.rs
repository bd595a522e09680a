//! CSV export of the whole employee table.

use crate::libs::employee::{Employee, COLUMNS};
use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};

pub struct CsvExporter {
    output_path: PathBuf,
}

impl CsvExporter {
    /// Without an explicit path the file is named
    /// `roster_export_<YYYYmmdd_HHMMSS>.csv` in the working directory.
    pub fn new(output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_file_name()));
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the header and one row per employee. Returns the row count.
    pub fn export(&self, employees: &[Employee]) -> Result<usize> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(COLUMNS)?;

        for employee in employees {
            wtr.write_record(employee.cells())?;
        }

        wtr.flush()?;
        tracing::debug!(path = %self.output_path.display(), rows = employees.len(), "csv export written");
        Ok(employees.len())
    }
}

pub fn default_file_name() -> String {
    format!("roster_export_{}.csv", Local::now().format("%Y%m%d_%H%M%S"))
}
