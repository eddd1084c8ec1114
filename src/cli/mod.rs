//! Terminal front end shared by the subcommands and the interactive mode

pub mod interactive;

use crate::models::{Dataset, GenerationResult, Schema};
use colored::*;
use serde::Serialize;
use std::path::PathBuf;

/// Parse an `OPTION=PATH` image argument
pub fn parse_image_arg(value: &str) -> Result<(String, PathBuf), String> {
    let (option, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected OPTION=PATH, got `{}`", value))?;
    let option = option.trim();
    if option.is_empty() || path.is_empty() {
        return Err(format!("expected OPTION=PATH, got `{}`", value));
    }
    Ok((option.to_string(), PathBuf::from(path)))
}

#[derive(Debug, Serialize)]
pub struct InspectSummary<'a> {
    pub columns: &'a [String],
    pub record_count: usize,
    pub schema: &'a Schema,
    pub preview: Vec<Vec<String>>,
}

impl<'a> InspectSummary<'a> {
    pub fn new(dataset: &'a Dataset, schema: &'a Schema, rows: usize) -> Self {
        Self {
            columns: &dataset.columns,
            record_count: dataset.len(),
            schema,
            preview: dataset.preview(rows),
        }
    }
}

pub fn print_preview(dataset: &Dataset, schema: &Schema, rows: usize) {
    println!("{}", "📊 Dataset Preview".bold().blue());
    println!("{}", "=".repeat(50).blue());
    println!();

    let preview = dataset.preview(rows);
    let widths: Vec<usize> = dataset
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            preview
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = dataset
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{:<width$}", c, width = w))
        .collect();
    println!("  {}", header.join(" │ ").bold());
    for row in &preview {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = w))
            .collect();
        println!("  {}", cells.join(" │ "));
    }
    if dataset.len() > preview.len() {
        println!("  {}", format!("… {} more rows", dataset.len() - preview.len()).dimmed());
    }
    println!();

    println!("Records: {}", dataset.len());
    println!("Options: {}", join_or_none(&schema.options));
    println!("Attributes: {}", join_or_none(&schema.attributes));
    if !schema.ignored.is_empty() {
        println!(
            "{} {}",
            "⚠️  Ignored columns:".yellow(),
            schema.ignored.join(", ")
        );
    }
}

pub fn print_generation_summary(result: &GenerationResult) {
    println!("{}", "✅ Generation completed successfully!".green().bold());
    println!();
    println!("📊 Summary:");
    println!("  - Pages: {}", result.pages.len());
    println!("  - Images: {}", result.images.len());
    println!("  - Archive: {}", result.archive_path.display());
    if let Some(dir) = &result.pages_dir {
        println!("  - Pages directory: {}", dir.display());
    }
    if let Some(report) = &result.report_path {
        println!("  - Report: {}", report.display());
    }

    if !result.duplicate_choices.is_empty() {
        println!();
        println!("{}", "⚠️  Duplicate choices (last row kept):".yellow().bold());
        for choice in &result.duplicate_choices {
            println!("  - {}", choice);
        }
    }

    if !result.warnings.is_empty() {
        println!();
        println!("{}", "⚠️  Warnings:".yellow().bold());
        for warning in &result.warnings {
            println!("  - {}", warning);
        }
    }
}

pub fn print_error(title: &str, err: &anyhow::Error) {
    eprintln!("{}", format!("❌ {}", title).red().bold());
    eprintln!("{}", format!("Error: {:#}", err).red());
}

fn join_or_none(items: &indexmap::IndexSet<String>) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
