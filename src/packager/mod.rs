//! Staging areas and archive building

pub mod builder;
pub mod staging;

pub use builder::{create_zip_from_directory, write_pages, write_zip, StagedOutput};
pub use staging::{ImageStore, StagingArea};
