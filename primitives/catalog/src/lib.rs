#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! attrgen attribute catalog
//!
//! This crate defines the data model that sits between the scraped attribute
//! table and code generation: one typed record per table row, the catalog
//! keyed by attribute name, and the inverted applicability groups.

pub mod attribute_catalog;
pub mod groups;

// Re-export the main catalog types for convenience
pub use attribute_catalog::*;
pub use groups::ApplicabilityGroups;
