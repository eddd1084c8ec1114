//! Situation questionnaire to HTML pages
//!
//! Reads a spreadsheet or CSV file describing a multiple-choice "situation"
//! questionnaire and writes one HTML comparison page per row, packaged with
//! the option images into a single ZIP archive.

pub mod error;
pub mod models;
pub mod parser;
pub mod analyzer;
pub mod validator;
pub mod renderer;
pub mod packager;
pub mod report;
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{IdentifierKind, SituationError, SituationResult};
pub use models::{
    CellValue, Dataset, GenerationOptions, GenerationResult, ImageAsset, Record, RenderedPage,
    Schema,
};
pub use parser::DatasetFormat;
pub use analyzer::analyze_dataset;
pub use packager::{ImageStore, StagingArea};

use anyhow::{Context, Result};
use models::PAGES_DIR_NAME;
use packager::StagedOutput;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Main entry point: dataset file and option images in, archive on disk out
///
/// `images` pairs an option name with the image file to show in its header.
pub fn generate_situations(
    input_path: &Path,
    images: &[(String, PathBuf)],
    output_dir: &Path,
    options: &GenerationOptions,
) -> Result<GenerationResult> {
    // 1. Load dataset
    let dataset = parser::load_dataset(input_path)?;

    // 2. Stage option images
    let store = ImageStore::new()?;
    for (option, path) in images {
        store
            .stage_file(option, path)
            .with_context(|| format!("Failed to stage image for option `{}`", option))?;
    }

    // 3. Render, package, report
    generate_from_dataset(&dataset, &store, output_dir, options)
}

/// Generate pages for an already loaded dataset into `output_dir`
pub fn generate_from_dataset(
    dataset: &Dataset,
    images: &ImageStore,
    output_dir: &Path,
    options: &GenerationOptions,
) -> Result<GenerationResult> {
    // Everything that can fail on the input is checked before this creates
    // any directory.
    validator::validate_options(options)?;
    let (schema, pages) = prepare_pages(dataset, images, options)?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| SituationError::staging(output_dir, e))?;
    let staging = if options.keep_pages {
        // Pages from an earlier run must not end up in this archive
        let area = StagingArea::persistent(output_dir.join(PAGES_DIR_NAME))?;
        area.clear()?;
        area
    } else {
        StagingArea::temporary("situations-html-")?
    };

    let staged = packager::write_pages(&pages, Some(images), &staging)?;

    let archive_path = output_dir.join(&options.archive_name);
    packager::create_zip_from_directory(staging.path(), &archive_path)?;
    tracing::info!(
        archive = %archive_path.display(),
        pages = staged.pages.len(),
        images = staged.images.len(),
        "archive written"
    );

    let mut result = build_result(archive_path, schema, dataset, &pages, staged);
    if !staging.is_temporary() {
        result.pages_dir = Some(staging.path().to_path_buf());
    }

    if options.generate_report {
        let report_path = result.archive_path.with_extension("md");
        let content = report::generate_report(&result)?;
        std::fs::write(&report_path, content)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
        result.report_path = Some(report_path);
    }

    Ok(result)
}

/// In-memory variant: dataset bytes and option images in, archive bytes out
pub fn generate_archive_bytes(
    dataset_bytes: &[u8],
    format: DatasetFormat,
    images: &[ImageAsset],
    options: &GenerationOptions,
) -> Result<Vec<u8>> {
    let dataset = parser::parse_dataset(dataset_bytes, format)?;

    let store = ImageStore::new()?;
    for image in images {
        store.stage(&image.option, &image.content)?;
    }

    let (_, pages) = prepare_pages(&dataset, &store, options)?;

    let staging = StagingArea::temporary("situations-html-")?;
    packager::write_pages(&pages, Some(&store), &staging)?;
    let cursor = packager::write_zip(staging.path(), Cursor::new(Vec::new()))?;

    Ok(cursor.into_inner())
}

/// Load a dataset and its schema without generating anything
pub fn inspect_dataset(input_path: &Path, option_prefix: Option<&str>) -> Result<(Dataset, Schema)> {
    let dataset = parser::load_dataset(input_path)?;
    let schema = analyze_dataset(&dataset, option_prefix);
    Ok((dataset, schema))
}

fn prepare_pages(
    dataset: &Dataset,
    images: &ImageStore,
    options: &GenerationOptions,
) -> Result<(Schema, Vec<RenderedPage>)> {
    validator::validate_dataset(dataset)?;
    let schema = analyze_dataset(dataset, options.option_prefix.as_deref());
    let pages = renderer::render_pages(dataset, &schema, Some(images))?;
    Ok((schema, pages))
}

fn build_result(
    archive_path: PathBuf,
    schema: Schema,
    dataset: &Dataset,
    pages: &[RenderedPage],
    staged: StagedOutput,
) -> GenerationResult {
    let mut result = GenerationResult::new(archive_path, schema);
    result.record_count = dataset.len();
    result.pages = staged.pages;
    result.images = staged.images;

    let mut seen = HashSet::new();
    for page in pages {
        let first_time = seen.insert(page.file_name.as_str());
        if !first_time && !result.duplicate_choices.contains(&page.choice) {
            tracing::warn!(choice = %page.choice, "duplicate choice, last row wins");
            result.duplicate_choices.push(page.choice.clone());
        }
    }

    if !result.schema.ignored.is_empty() {
        let ignored = result.schema.ignored.join(", ");
        result.add_warning(format!("Ignored columns: {}", ignored));
    }
    if result.schema.options.is_empty() {
        result.add_warning("No option columns found; pages only carry the header");
    }

    result
}
