//! Options and attributes discovered from the dataset header

use indexmap::IndexSet;
use serde::Serialize;

/// Prefix a column must carry to be read as `<option>.<attribute>`
pub const DEFAULT_OPTION_PREFIX: &str = "option";

/// Delimiter between the option and attribute halves of a column name
pub const KEY_DELIMITER: char = '.';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Unique option names, first-seen column order
    pub options: IndexSet<String>,
    /// Unique attribute names, first-seen column order
    pub attributes: IndexSet<String>,
    /// Columns that took no part in the schema (`Choice` excluded)
    pub ignored: Vec<String>,
}

impl Schema {
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.attributes.is_empty()
    }

    /// Column holding the value of `attribute` for `option`
    pub fn key(option: &str, attribute: &str) -> String {
        format!("{}{}{}", option, KEY_DELIMITER, attribute)
    }
}
