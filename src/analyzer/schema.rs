//! Option/attribute discovery from `<option>.<attribute>` column names

use crate::models::{Schema, CHOICE_COLUMN, KEY_DELIMITER};

/// Split columns into options and attributes
///
/// A column qualifies when it starts with `prefix` (any column when `None`)
/// and splits on `.` into exactly two non-empty parts. Everything else except
/// `Choice` lands in `Schema::ignored`.
pub fn extract_schema<S: AsRef<str>>(columns: &[S], prefix: Option<&str>) -> Schema {
    let mut schema = Schema::default();

    for column in columns {
        let column = column.as_ref();
        if column == CHOICE_COLUMN {
            continue;
        }

        match split_key(column, prefix) {
            Some((option, attribute)) => {
                schema.options.insert(option.to_string());
                schema.attributes.insert(attribute.to_string());
            }
            None => schema.ignored.push(column.to_string()),
        }
    }

    schema
}

/// `("option1", "prix")` for `option1.prix`
pub fn split_key<'a>(column: &'a str, prefix: Option<&str>) -> Option<(&'a str, &'a str)> {
    if let Some(prefix) = prefix {
        if !column.starts_with(prefix) {
            return None;
        }
    }

    let mut parts = column.split(KEY_DELIMITER);
    let option = parts.next()?;
    let attribute = parts.next()?;
    if parts.next().is_some() || option.is_empty() || attribute.is_empty() {
        return None;
    }

    Some((option, attribute))
}
