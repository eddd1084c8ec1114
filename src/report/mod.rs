//! Report generation

pub mod generator;

use crate::models::GenerationResult;
use anyhow::Result;

pub fn generate_report(result: &GenerationResult) -> Result<String> {
    generator::generate_markdown_report(result)
}
