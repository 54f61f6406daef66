//! Applicability groups: attribute names indexed by element-kind label.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Mapping from an element-kind label to the ordered, duplicate-free set of
/// attribute names usable on that kind.
///
/// Both the labels and the names inside each group keep first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicabilityGroups {
    groups: IndexMap<String, IndexSet<String>>,
}

impl ApplicabilityGroups {
    /// Create an empty set of groups.
    pub fn new() -> Self { Self::default() }

    /// Add `name` to the group for `label`, creating the group on first use.
    ///
    /// Returns `false` if the name was already present in that group.
    pub fn insert(&mut self, label: &str, name: &str) -> bool {
        self.groups.entry(label.to_string()).or_default().insert(name.to_string())
    }

    /// Attribute names for `label`, in insertion order.
    pub fn get(&self, label: &str) -> Option<&IndexSet<String>> { self.groups.get(label) }

    /// Whether `name` belongs to the group for `label`.
    pub fn contains(&self, label: &str, name: &str) -> bool {
        self.groups.get(label).is_some_and(|names| names.contains(name))
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> { self.groups.keys().map(String::as_str) }

    /// Iterate over `(label, names)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.groups.iter().map(|(label, names)| (label.as_str(), names))
    }

    /// Number of groups.
    pub fn len(&self) -> usize { self.groups.len() }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }
}
