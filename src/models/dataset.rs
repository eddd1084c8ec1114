//! Tabular dataset loaded from a CSV file or a spreadsheet

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Column that identifies each situation
pub const CHOICE_COLUMN: &str = "Choice";

/// A single cell, as read from the input file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Integer(i) => write!(f, "{}", i),
            // Spreadsheets store every number as a float; `3.0` reads as `3`
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::from(s.as_str())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// One row of the dataset, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub values: HashMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    /// Header names in file order
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `rows` records rendered as display strings, in column order
    pub fn preview(&self, rows: usize) -> Vec<Vec<String>> {
        self.records
            .iter()
            .take(rows)
            .map(|record| {
                self.columns
                    .iter()
                    .map(|c| record.get(c).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(CellValue::Number(3.0).to_string(), "3");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Number(-0.25).to_string(), "-0.25");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_empty_string_is_empty_cell() {
        assert_eq!(CellValue::from(""), CellValue::Empty);
        assert!(CellValue::from("").is_empty());
        assert!(!CellValue::Integer(0).is_empty());
    }

    #[test]
    fn test_preview_follows_column_order() {
        let dataset = Dataset::new(
            vec!["Choice".into(), "option1.prix".into()],
            vec![
                Record::new().with("Choice", "S1").with("option1.prix", "10"),
                Record::new().with("Choice", "S2"),
                Record::new().with("Choice", "S3"),
            ],
        );

        let preview = dataset.preview(2);
        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0], vec!["S1".to_string(), "10".to_string()]);
        assert_eq!(preview[1], vec!["S2".to_string(), String::new()]);
    }
}
