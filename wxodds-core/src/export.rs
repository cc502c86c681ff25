//! CSV and JSON export actions.

use crate::query::ExportRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "/download/csv",
            ExportFormat::Json => "/download/json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Filename for a saved export: `{city}_weather_{date}.{ext}`, lowercased
    /// with spaces replaced by underscores.
    pub fn filename(&self, request: &ExportRequest) -> String {
        let city = request.city.trim().to_lowercase();
        format!("{}_weather_{}.{}", city, request.date, self.extension()).replace(' ', "_")
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(anyhow::anyhow!(
                "Unknown export format '{value}'. Supported formats: csv, json."
            )),
        }
    }
}

/// A downloaded export, ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}
