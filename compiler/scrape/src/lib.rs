#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Attribute table extraction.
//!
//! Reads the first `<table>` of an HTML document, takes its first header row
//! as column names, renames the `Description, notes` column to `Description`
//! and turns every data row into a [`RawAttributeRow`].
//!
//! Only the presence of the table and of the three required columns is
//! checked. Cell text is whitespace-normalized and otherwise left untouched.

pub mod table;

use catalog::RawAttributeRow;
use thiserror::Error;

pub use table::{extract_first_table, Table};

/// Column holding the attribute name.
pub const NAME_COLUMN: &str = "Name";
/// Column holding the comma-separated element-kind labels.
pub const USED_BY_COLUMN: &str = "Used By";
/// Description column after renaming.
pub const DESCRIPTION_COLUMN: &str = "Description";
/// Description column as it is titled upstream.
pub const SOURCE_DESCRIPTION_COLUMN: &str = "Description, notes";

/// Errors raised while extracting the attribute table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The document contains no `<table>` element.
    #[error("no table found in document")]
    NoTable,
    /// The first table has no rows to take column names from.
    #[error("table has no header row")]
    NoHeader,
    /// A required column is absent from the header row.
    #[error("required column `{0}` is missing")]
    MissingColumn(String),
    /// A data row has an empty `Name` cell.
    #[error("row {row} has an empty attribute name")]
    EmptyName {
        /// 1-based index of the data row.
        row: usize,
    },
    /// A CSS selector failed to compile.
    #[error("invalid selector: {0}")]
    Selector(String),
}

/// Convenient result type for extraction.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Rename upstream column titles to the names used by the rest of the pipeline.
///
/// Only the title changes; cell values are untouched.
pub fn rename_columns(table: &mut Table) {
    for column in &mut table.columns {
        if column == SOURCE_DESCRIPTION_COLUMN {
            *column = DESCRIPTION_COLUMN.to_string();
        }
    }
}

/// Extract the attribute rows of the first table in `html`, in document order.
pub fn extract_rows(html: &str) -> Result<Vec<RawAttributeRow>> {
    let mut table = extract_first_table(html)?;
    rename_columns(&mut table);

    let name = table.require_column(NAME_COLUMN)?;
    let used_by = table.require_column(USED_BY_COLUMN)?;
    let description = table.require_column(DESCRIPTION_COLUMN)?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();

        let row_name = cell(name);
        if row_name.is_empty() {
            return Err(ParseError::EmptyName { row: i + 1 });
        }
        rows.push(RawAttributeRow::new(row_name, cell(description), cell(used_by)));
    }

    logging::trace("SCRAPE", &format!("extracted {} attribute rows", rows.len()));
    Ok(rows)
}
