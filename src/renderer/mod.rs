//! HTML page rendering

pub mod page;
pub mod template;

use crate::error::SituationResult;
use crate::models::{Dataset, RenderedPage, Schema};
use crate::packager::ImageStore;
use crate::validator::validate_dataset;

pub use page::render_page;

/// Render every record of the dataset in memory
///
/// Nothing is written here, so any error leaves the filesystem untouched.
pub fn render_pages(
    dataset: &Dataset,
    schema: &Schema,
    images: Option<&ImageStore>,
) -> SituationResult<Vec<RenderedPage>> {
    validate_dataset(dataset)?;

    let mut pages = Vec::with_capacity(dataset.len());
    for (index, record) in dataset.records.iter().enumerate() {
        let page = render_page(record, index + 1, schema, |option| {
            images.map_or(false, |store| store.contains(option))
        })?;
        tracing::debug!(choice = %page.choice, file = %page.file_name, "page rendered");
        pages.push(page);
    }

    Ok(pages)
}
