//! Section generators for the attribute module.
//!
//! Each generator renders one contiguous section of the output file; the
//! sections are concatenated in a fixed order by [`crate::render_module`].

/// Sub-crate generates: **`doc_comment`**
///
/// Turns scraped descriptions into single-line Rust-doc text with a link to
/// the attribute's documentation page.
pub mod doc_comment;

/// Imports and the private `quote` helper shared by all collection types.
pub mod prelude;
pub use prelude::PreludeGenerator;

/// The `Attribute` enum with identity-only equality and its pair projection.
pub mod attribute_enum;
pub use attribute_enum::AttributeEnumGenerator;

/// One collection type per element kind with typed setters and unsetters.
pub mod attribute_sets;
pub use attribute_sets::AttributeSetsGenerator;
