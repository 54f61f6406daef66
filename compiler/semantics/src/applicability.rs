//! Applicability grouping for attribute-set generation
//!
//! This module inverts the attribute catalog into one group per element kind,
//! which drives the per-kind collection types emitted by codegen.

use catalog::{ApplicabilityGroups, AttributeCatalog};

/// Label used upstream for graph vertices.
pub const UPSTREAM_VERTEX_LABEL: &str = "Node";
/// Label used in generated code for graph vertices.
pub const VERTEX_LABEL: &str = "Vertex";

/// Normalize an upstream element-kind label (`Nodes` → `Vertexs`).
///
/// The replacement is textual, so the plural suffix survives and is stripped
/// later together with every other label's.
pub fn normalize_label(label: &str) -> String { label.replace(UPSTREAM_VERTEX_LABEL, VERTEX_LABEL) }

/// Group attribute names by normalized element-kind label.
///
/// Traversal follows catalog order, so both the label order and the name
/// order inside each group are first-seen document order.
pub fn group_by_applicability(catalog: &AttributeCatalog) -> ApplicabilityGroups {
    let mut groups = ApplicabilityGroups::new();

    for record in catalog {
        for label in &record.used_by {
            groups.insert(&normalize_label(label), &record.name);
        }
    }

    groups
}
