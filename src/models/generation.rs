//! Generation settings and results

use super::Schema;
use std::path::PathBuf;

/// Name of the archive produced when none is configured
pub const DEFAULT_ARCHIVE_NAME: &str = "situations_html.zip";

/// Directory kept next to the archive when pages are persisted
pub const PAGES_DIR_NAME: &str = "situations_html";

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub archive_name: String,
    /// `None` accepts any `<option>.<attribute>` column
    pub option_prefix: Option<String>,
    /// Leave the rendered pages in `situations_html/` next to the archive
    pub keep_pages: bool,
    pub generate_report: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            option_prefix: Some(super::DEFAULT_OPTION_PREFIX.to_string()),
            keep_pages: false,
            generate_report: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub archive_path: PathBuf,
    pub schema: Schema,
    pub record_count: usize,
    /// Page file names in archive order
    pub pages: Vec<String>,
    /// Option images copied next to the pages
    pub images: Vec<String>,
    /// Choices that appeared more than once; the last row won
    pub duplicate_choices: Vec<String>,
    pub pages_dir: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl GenerationResult {
    pub fn new(archive_path: PathBuf, schema: Schema) -> Self {
        Self {
            archive_path,
            schema,
            record_count: 0,
            pages: Vec::new(),
            images: Vec::new(),
            duplicate_choices: Vec::new(),
            pages_dir: None,
            report_path: None,
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}
