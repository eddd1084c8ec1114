//! Dataset analysis

pub mod schema;

use crate::models::{Dataset, Schema};

/// Derive the option/attribute schema from a dataset header
pub fn analyze_dataset(dataset: &Dataset, option_prefix: Option<&str>) -> Schema {
    let schema = schema::extract_schema(&dataset.columns, option_prefix);

    tracing::info!(
        options = schema.options.len(),
        attributes = schema.attributes.len(),
        "schema extracted"
    );
    if !schema.ignored.is_empty() {
        tracing::warn!(columns = ?schema.ignored, "columns ignored, not `<option>.<attribute>`");
    }

    schema
}
