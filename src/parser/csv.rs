//! CSV datasets

use crate::models::{CellValue, Dataset, Record};
use anyhow::{Context, Result};

/// Parse CSV bytes; the first line is the header
///
/// Rows shorter than the header are kept and simply lack the trailing
/// columns. Surplus fields beyond the header are dropped.
pub fn parse_csv(content: &[u8]) -> Result<Dataset> {
    let mut reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content);

    let columns: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("Failed to read CSV row {}", index + 1))?;

        let mut record = Record::new();
        for (column, field) in columns.iter().zip(row.iter()) {
            record.insert(column.clone(), CellValue::from(field));
        }
        records.push(record);
    }

    Ok(Dataset::new(columns, records))
}
