//! Writing pages to the staging area and zipping it

use super::staging::{ImageStore, StagingArea};
use crate::error::{SituationError, SituationResult};
use crate::models::{image_file_name, RenderedPage};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Files placed in the output staging area by `write_pages`
#[derive(Debug, Clone, Default)]
pub struct StagedOutput {
    pub pages: Vec<String>,
    pub images: Vec<String>,
}

/// Write every page, then copy the images the pages point at
///
/// Pages sharing a file name overwrite each other in order.
pub fn write_pages(
    pages: &[RenderedPage],
    images: Option<&ImageStore>,
    staging: &StagingArea,
) -> SituationResult<StagedOutput> {
    let mut output = StagedOutput::default();
    let mut written = HashSet::new();

    for page in pages {
        staging.write_file(&page.file_name, page.html.as_bytes())?;
        if written.insert(page.file_name.clone()) {
            output.pages.push(page.file_name.clone());
        }

        let Some(store) = images else { continue };
        for option in &page.illustrated_options {
            let name = image_file_name(option);
            if !written.insert(name.clone()) {
                continue;
            }
            staging.copy_file(&store.path_for(option), &name)?;
            output.images.push(name);
        }
    }

    Ok(output)
}

/// Zip everything under `source_dir` into a new file at `zip_path`
pub fn create_zip_from_directory(source_dir: &Path, zip_path: &Path) -> SituationResult<()> {
    let file = File::create(zip_path).map_err(|e| SituationError::staging(zip_path, e))?;
    write_zip(source_dir, file)?;
    Ok(())
}

/// Zip everything under `source_dir` into `writer`
///
/// Entries are named relative to `source_dir`, sorted, and carry a fixed
/// timestamp, so the same files always give the same bytes.
pub fn write_zip<W: Write + Seek>(source_dir: &Path, writer: W) -> SituationResult<W> {
    let mut zip = ZipWriter::new(writer);

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
        .unix_permissions(0o644);

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source_dir).to_path_buf();
            SituationError::staging(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(source_dir) else {
            continue;
        };
        let name = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let content = fs::read(path).map_err(|e| SituationError::staging(path, e))?;
        zip.start_file(name, options)
            .map_err(|e| SituationError::archive(path, e))?;
        zip.write_all(&content)
            .map_err(|e| SituationError::staging(path, e))?;
    }

    zip.finish().map_err(|e| SituationError::archive(source_dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn page(choice: &str, html: &str, illustrated: &[&str]) -> RenderedPage {
        RenderedPage {
            choice: choice.to_string(),
            row: 1,
            file_name: crate::models::page_file_name(choice),
            html: html.to_string(),
            illustrated_options: illustrated.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Entry names in the order they were written
    fn entry_names(bytes: Vec<u8>) -> Vec<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn test_duplicate_choice_last_write_wins() {
        let staging = StagingArea::temporary("builder-test-").unwrap();
        let pages = [page("S1", "first", &[]), page("S1", "second", &[])];

        let output = write_pages(&pages, None, &staging).unwrap();

        assert_eq!(output.pages, vec!["situation_S1.html".to_string()]);
        let content = fs::read_to_string(staging.path().join("situation_S1.html")).unwrap();
        assert_eq!(content, "second");
    }

    #[test]
    fn test_images_are_copied_once() {
        let store = ImageStore::new().unwrap();
        store.stage("A", b"png").unwrap();
        let staging = StagingArea::temporary("builder-test-").unwrap();
        let pages = [page("S1", "a", &["A"]), page("S2", "b", &["A"])];

        let output = write_pages(&pages, Some(&store), &staging).unwrap();

        assert_eq!(output.images, vec!["A.png".to_string()]);
        assert_eq!(fs::read(staging.path().join("A.png")).unwrap(), b"png");
    }

    #[test]
    fn test_zip_entries_are_relative_and_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("situation_S2.html"), "b").unwrap();
        fs::write(temp.path().join("situation_S1.html"), "a").unwrap();
        fs::write(temp.path().join("A.png"), "img").unwrap();

        let bytes = write_zip(temp.path(), Cursor::new(Vec::new()))
            .unwrap()
            .into_inner();

        assert_eq!(
            entry_names(bytes),
            vec!["A.png", "situation_S1.html", "situation_S2.html"]
        );
    }

    #[test]
    fn test_zip_is_reproducible() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("situation_S1.html"), "a").unwrap();

        let first = write_zip(temp.path(), Cursor::new(Vec::new())).unwrap().into_inner();
        let second = write_zip(temp.path(), Cursor::new(Vec::new())).unwrap().into_inner();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_source_dir_fails() {
        let temp = TempDir::new().unwrap();
        let err = write_zip(&temp.path().join("absent"), Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, SituationError::StagingIo { .. }));
    }
}
