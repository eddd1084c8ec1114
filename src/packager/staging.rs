//! Scoped scratch directories for images and rendered pages

use crate::error::{IdentifierKind, SituationError, SituationResult};
use crate::models::image_file_name;
use crate::validator::validate_identifier;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A directory files are gathered in before archiving
///
/// Temporary areas are deleted when the handle is dropped; persistent ones
/// stay on disk.
#[derive(Debug)]
pub struct StagingArea {
    root: PathBuf,
    temp: Option<TempDir>,
}

impl StagingArea {
    pub fn temporary(prefix: &str) -> SituationResult<Self> {
        let temp = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|e| SituationError::staging(std::env::temp_dir(), e))?;

        Ok(Self {
            root: temp.path().to_path_buf(),
            temp: Some(temp),
        })
    }

    pub fn persistent(path: impl Into<PathBuf>) -> SituationResult<Self> {
        let root = path.into();
        fs::create_dir_all(&root).map_err(|e| SituationError::staging(&root, e))?;
        Ok(Self { root, temp: None })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn is_temporary(&self) -> bool {
        self.temp.is_some()
    }

    /// Remove everything inside the area, keeping the directory itself
    pub fn clear(&self) -> SituationResult<()> {
        let entries = fs::read_dir(&self.root).map_err(|e| SituationError::staging(&self.root, e))?;
        for entry in entries {
            let path = entry.map_err(|e| SituationError::staging(&self.root, e))?.path();
            let removed = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            removed.map_err(|e| SituationError::staging(&path, e))?;
        }
        Ok(())
    }

    /// Write `content` as `name`, replacing any file already there
    pub fn write_file(&self, name: &str, content: &[u8]) -> SituationResult<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, content).map_err(|e| SituationError::staging(&path, e))?;
        Ok(path)
    }

    pub fn copy_file(&self, source: &Path, name: &str) -> SituationResult<PathBuf> {
        let path = self.root.join(name);
        fs::copy(source, &path).map_err(|e| SituationError::staging(source, e))?;
        Ok(path)
    }
}

/// Staging area holding one `<option>.png` per illustrated option
#[derive(Debug)]
pub struct ImageStore {
    area: StagingArea,
}

impl ImageStore {
    pub fn new() -> SituationResult<Self> {
        Ok(Self {
            area: StagingArea::temporary("situation-images-")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.area.path()
    }

    /// Store image bytes for `option`, replacing a previous image
    pub fn stage(&self, option: &str, content: &[u8]) -> SituationResult<PathBuf> {
        validate_identifier(option, IdentifierKind::Option)?;
        let path = self.area.write_file(&image_file_name(option), content)?;
        tracing::debug!(option, path = %path.display(), "image staged");
        Ok(path)
    }

    /// Stage an image from disk; its extension is not kept
    pub fn stage_file(&self, option: &str, source: &Path) -> SituationResult<PathBuf> {
        validate_identifier(option, IdentifierKind::Option)?;
        let path = self.area.copy_file(source, &image_file_name(option))?;
        tracing::debug!(option, source = %source.display(), "image staged");
        Ok(path)
    }

    pub fn path_for(&self, option: &str) -> PathBuf {
        self.area.path().join(image_file_name(option))
    }

    pub fn contains(&self, option: &str) -> bool {
        validate_identifier(option, IdentifierKind::Option).is_ok()
            && self.path_for(option).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_area_is_removed_on_drop() {
        let area = StagingArea::temporary("staging-test-").unwrap();
        let root = area.path().to_path_buf();
        area.write_file("a.html", b"<html></html>").unwrap();
        assert!(root.join("a.html").is_file());

        drop(area);
        assert!(!root.exists());
    }

    #[test]
    fn test_persistent_area_survives_drop() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("pages");

        let area = StagingArea::persistent(&dir).unwrap();
        assert!(!area.is_temporary());
        area.write_file("a.html", b"x").unwrap();
        drop(area);

        assert!(dir.join("a.html").is_file());
    }

    #[test]
    fn test_clear_empties_persistent_area() {
        let temp = TempDir::new().unwrap();
        let area = StagingArea::persistent(temp.path().join("pages")).unwrap();
        area.write_file("situation_OLD.html", b"old").unwrap();
        fs::create_dir(area.path().join("nested")).unwrap();
        fs::write(area.path().join("nested").join("a.png"), b"img").unwrap();

        area.clear().unwrap();

        assert!(area.path().is_dir());
        assert_eq!(fs::read_dir(area.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_image_is_staged_as_png() {
        let store = ImageStore::new().unwrap();
        let source = store.path().join("photo.jpeg");
        fs::write(&source, b"jpeg bytes").unwrap();

        let staged = store.stage_file("option1", &source).unwrap();
        assert_eq!(staged.file_name().unwrap(), "option1.png");
        assert!(store.contains("option1"));
        assert!(!store.contains("option2"));
    }

    #[test]
    fn test_unsafe_option_name_is_rejected() {
        let store = ImageStore::new().unwrap();
        let err = store.stage("../option1", b"png").unwrap_err();
        assert!(matches!(err, SituationError::UnsafeIdentifier { .. }));
        assert!(!store.contains("../option1"));
    }
}
