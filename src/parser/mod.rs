//! Dataset parsing (CSV and spreadsheets)

pub mod csv;
pub mod spreadsheet;

use crate::models::Dataset;
use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Spreadsheet,
}

impl DatasetFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(DatasetFormat::Csv),
            Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
                Ok(DatasetFormat::Spreadsheet)
            }
            _ => anyhow::bail!(
                "Unsupported dataset format for {}. Expected a .csv or .xlsx file",
                path.display()
            ),
        }
    }
}

/// Load a dataset from a file, picking the parser from its extension
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let format = DatasetFormat::from_path(path)?;
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_dataset(&content, format)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse dataset bytes already in memory
pub fn parse_dataset(content: &[u8], format: DatasetFormat) -> Result<Dataset> {
    let dataset = match format {
        DatasetFormat::Csv => csv::parse_csv(content)?,
        DatasetFormat::Spreadsheet => spreadsheet::parse_spreadsheet(content)?,
    };

    tracing::debug!(
        columns = dataset.columns.len(),
        records = dataset.records.len(),
        "dataset parsed"
    );
    Ok(dataset)
}
