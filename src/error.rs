//! Error kinds surfaced by page generation

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SituationError {
    /// A required column is absent from the dataset header
    #[error("dataset has no `{column}` column")]
    MissingColumn { column: String },

    /// A record lacks a value that the schema says must exist
    #[error("situation `{choice}` (row {row}) has no value for column `{key}`")]
    MissingValue {
        choice: String,
        row: usize,
        key: String,
    },

    /// A value that ends up in a file name is not path-safe
    #[error("{kind} `{value}` cannot be used as a file name: {reason}")]
    UnsafeIdentifier {
        kind: IdentifierKind,
        value: String,
        reason: &'static str,
    },

    #[error("staging failed at {}: {source}", .path.display())]
    StagingIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SituationError {
    pub fn staging(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SituationError::StagingIo {
            path: path.into(),
            source,
        }
    }

    pub fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        SituationError::StagingIo {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Choice,
    Option,
    Archive,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Choice => write!(f, "choice"),
            IdentifierKind::Option => write!(f, "option"),
            IdentifierKind::Archive => write!(f, "archive name"),
        }
    }
}

pub type SituationResult<T> = std::result::Result<T, SituationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_message_locates_row() {
        let err = SituationError::MissingValue {
            choice: "S3".to_string(),
            row: 3,
            key: "option2.prix".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "situation `S3` (row 3) has no value for column `option2.prix`"
        );
    }

    #[test]
    fn test_archive_error_becomes_staging_io() {
        let err = SituationError::archive(
            "out.zip",
            zip::result::ZipError::FileNotFound,
        );
        assert!(matches!(err, SituationError::StagingIo { .. }));
    }
}
