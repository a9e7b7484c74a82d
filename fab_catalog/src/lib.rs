//! Flesh and Blood catalog export
//!
//! Downloads the community card dataset, gives every printing a stable unique
//! id and writes a name-sorted CSV catalog for pricing tools and spreadsheets.

pub mod catalog;
pub mod error;
pub mod fetcher;
pub mod locale;
pub mod pipeline;
pub mod writer;

pub use catalog::{build_catalog, CatalogRow};
pub use error::{CatalogError, Result};
pub use locale::Locale;
pub use pipeline::{run, PipelineConfig, RunSummary};
