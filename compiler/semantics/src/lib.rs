#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Semantic passes over the attribute catalog.
//!
//! Inverts the catalog into applicability groups (which attributes each
//! element kind accepts) and checks the assumptions the generator makes about
//! the upstream `Used By` column.

/// Grouping of attributes by element kind
pub mod applicability;
/// Checks on the shape of the scraped `Used By` data
pub mod schema_check;

pub use applicability::{group_by_applicability, normalize_label};
pub use schema_check::{check_schema, enforce, SchemaFinding};

/// Errors that can occur during semantic analysis.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The scraped data breaks an assumption the generator relies on.
    #[error("schema assumption violated: {}", join_findings(.0))]
    SchemaAssumptionViolation(Vec<SchemaFinding>),
}

fn join_findings(findings: &[SchemaFinding]) -> String {
    findings.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Result type for semantic analysis operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
