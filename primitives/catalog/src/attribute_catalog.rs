//! Attribute records and the catalog keyed by attribute name.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Delimiter separating element-kind labels in the `Used By` column.
pub const USED_BY_DELIMITER: &str = ", ";

/// One data row of the upstream attribute table, as read from the document.
///
/// The `used_by` cell is kept verbatim; splitting it into labels happens
/// when the row is turned into an [`AttributeRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttributeRow {
    /// Attribute name as written in the `Name` column.
    pub name: String,
    /// Free-text description (the renamed `Description, notes` column).
    pub description: String,
    /// Comma-separated element-kind labels from the `Used By` column.
    pub used_by: String,
}

impl RawAttributeRow {
    /// Create a raw row from its three cells.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        used_by: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), description: description.into(), used_by: used_by.into() }
    }
}

/// A typed attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Attribute name, unique within a catalog.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Element-kind labels in table order, e.g. `["Edges", "Nodes"]`.
    pub used_by: Vec<String>,
}

impl From<RawAttributeRow> for AttributeRecord {
    fn from(row: RawAttributeRow) -> Self {
        Self {
            used_by: split_used_by(&row.used_by),
            name: row.name,
            description: row.description,
        }
    }
}

/// Split a `Used By` cell on [`USED_BY_DELIMITER`].
///
/// Labels are not trimmed or validated; only empty pieces are dropped, so an
/// empty cell yields no labels at all.
pub fn split_used_by(text: &str) -> Vec<String> {
    text.split(USED_BY_DELIMITER).filter(|label| !label.is_empty()).map(String::from).collect()
}

/// Mapping from attribute name to its record, in first-seen document order.
///
/// Duplicate names are resolved last-write-wins: the later record replaces
/// the earlier one but keeps the earlier position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeCatalog {
    records: IndexMap<String, AttributeRecord>,
}

impl AttributeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self { Self::default() }

    /// Build a catalog from raw table rows in document order.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawAttributeRow>,
    {
        rows.into_iter().map(AttributeRecord::from).collect()
    }

    /// Insert a record, returning the record it replaced (if any).
    pub fn insert(&mut self, record: AttributeRecord) -> Option<AttributeRecord> {
        self.records.insert(record.name.clone(), record)
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttributeRecord> { self.records.get(name) }

    /// Whether the catalog knows the attribute `name`.
    pub fn contains(&self, name: &str) -> bool { self.records.contains_key(name) }

    /// Number of distinct attribute names.
    pub fn len(&self) -> usize { self.records.len() }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Iterate over records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeRecord> { self.records.values() }

    /// Iterate over attribute names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> { self.records.keys().map(String::as_str) }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    /// Save the catalog to a JSON file with pretty formatting
    pub fn to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        // Ensure file ends with a newline (POSIX standard)
        use std::io::Write;
        writeln!(file)?;
        Ok(())
    }
}

impl FromIterator<AttributeRecord> for AttributeCatalog {
    fn from_iter<T: IntoIterator<Item = AttributeRecord>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a AttributeCatalog {
    type Item = &'a AttributeRecord;
    type IntoIter = indexmap::map::Values<'a, String, AttributeRecord>;

    fn into_iter(self) -> Self::IntoIter { self.records.values() }
}
