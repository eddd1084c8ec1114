//! File-name safety of user supplied identifiers

use crate::error::{IdentifierKind, SituationError, SituationResult};

const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Reject values that cannot be used verbatim inside a single file name
pub fn validate_identifier(value: &str, kind: IdentifierKind) -> SituationResult<()> {
    let reason = if value.trim().is_empty() {
        Some("value is empty")
    } else if value == "." || value == ".." {
        Some("value is a relative path component")
    } else if value.chars().any(|c| FORBIDDEN_CHARS.contains(&c)) {
        Some("value contains a path separator or reserved character")
    } else if value.chars().any(char::is_control) {
        Some("value contains a control character")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SituationError::UnsafeIdentifier {
            kind,
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
