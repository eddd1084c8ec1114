//! Core data models for situation page generation

pub mod dataset;
pub mod schema;
pub mod page;
pub mod generation;

pub use dataset::*;
pub use schema::*;
pub use page::*;
pub use generation::*;
