//! Spreadsheet datasets (first worksheet, first row as header)

use crate::models::{CellValue, Dataset, Record};
use anyhow::{Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

pub fn parse_spreadsheet(content: &[u8]) -> Result<Dataset> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(content.to_vec()))
        .context("Failed to open spreadsheet")?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Spreadsheet has no worksheet"))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read worksheet `{}`", sheet_name))?;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        None => return Ok(Dataset::default()),
    };

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let mut record = Record::new();
        for (column, cell) in columns.iter().zip(row.iter()) {
            if column.is_empty() {
                continue;
            }
            record.insert(column.clone(), cell_value(cell));
        }
        records.push(record);
    }

    Ok(Dataset::new(
        columns.into_iter().filter(|c| !c.is_empty()).collect(),
        records,
    ))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::from(s.as_str()),
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_conversion() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::Float(4.0)).to_string(), "4");
        assert_eq!(
            cell_value(&Data::String("rapide".into())),
            CellValue::Text("rapide".into())
        );
        assert_eq!(cell_value(&Data::String(String::new())), CellValue::Empty);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        assert!(parse_spreadsheet(b"not a workbook").is_err());
    }
}
