//! Validation module

pub mod identifiers;

use crate::error::{IdentifierKind, SituationError, SituationResult};
use crate::models::{Dataset, GenerationOptions, CHOICE_COLUMN};

pub use identifiers::validate_identifier;

/// Checks that must pass before anything touches the filesystem
pub fn validate_dataset(dataset: &Dataset) -> SituationResult<()> {
    if !dataset.has_column(CHOICE_COLUMN) {
        return Err(SituationError::MissingColumn {
            column: CHOICE_COLUMN.to_string(),
        });
    }
    Ok(())
}

/// The archive must land directly inside the output directory
pub fn validate_options(options: &GenerationOptions) -> SituationResult<()> {
    validate_identifier(&options.archive_name, IdentifierKind::Archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_missing_choice_column() {
        let dataset = Dataset::new(
            vec!["option1.prix".into()],
            vec![Record::new().with("option1.prix", "10")],
        );

        let err = validate_dataset(&dataset).unwrap_err();
        assert!(matches!(err, SituationError::MissingColumn { ref column } if column == "Choice"));
    }

    #[test]
    fn test_archive_name_must_stay_in_output_dir() {
        for name in ["../escaped.zip", "sub/dir.zip", ""] {
            let options = GenerationOptions {
                archive_name: name.to_string(),
                ..GenerationOptions::default()
            };
            let err = validate_options(&options).unwrap_err();
            assert!(matches!(
                err,
                SituationError::UnsafeIdentifier { kind: IdentifierKind::Archive, .. }
            ));
        }
        assert!(validate_options(&GenerationOptions::default()).is_ok());
    }

    #[test]
    fn test_choice_column_present() {
        let dataset = Dataset::new(vec!["Choice".into()], Vec::new());
        assert!(validate_dataset(&dataset).is_ok());
    }
}
