//! Generic HTML table reading.

use scraper::{ElementRef, Html, Selector};

use crate::{ParseError, Result};

/// A table as read from the document: column titles plus data rows of cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Titles of the first header row.
    pub columns: Vec<String>,
    /// Data rows in document order; rows may be shorter than `columns`.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of the column titled `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Index of the column titled `name`, or [`ParseError::MissingColumn`].
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| ParseError::MissingColumn(name.to_string()))
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ParseError::Selector(format!("{css}: {e}")))
}

/// Collapse runs of whitespace into single spaces and trim the ends.
fn normalize_text(text: &str) -> String { text.split_whitespace().collect::<Vec<_>>().join(" ") }

fn cell_text(cell: ElementRef<'_>) -> String { normalize_text(&cell.text().collect::<String>()) }

/// Whether `row` belongs directly to `table` rather than to a nested table.
fn owned_by(row: ElementRef<'_>, table: ElementRef<'_>) -> bool {
    row.ancestors()
        .find(|node| node.value().as_element().is_some_and(|el| el.name() == "table"))
        .is_some_and(|node| node.id() == table.id())
}

/// Direct `th`/`td` children of a row, with a flag telling whether any is a `th`.
fn row_cells(row: ElementRef<'_>) -> (Vec<String>, bool) {
    let mut has_header = false;
    let cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| match cell.value().name() {
            "th" => {
                has_header = true;
                true
            }
            "td" => true,
            _ => false,
        })
        .map(cell_text)
        .collect();
    (cells, has_header)
}

/// Read the first table of `html`.
///
/// The first row containing a `th` cell supplies the column titles (the first
/// row at all when no `th` is present); every later row with cells is data.
pub fn extract_first_table(html: &str) -> Result<Table> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;

    let table = document.select(&table_selector).next().ok_or(ParseError::NoTable)?;

    let rows: Vec<(Vec<String>, bool)> = table
        .select(&row_selector)
        .filter(|row| owned_by(*row, table))
        .map(row_cells)
        .filter(|(cells, _)| !cells.is_empty())
        .collect();

    let header_idx = rows.iter().position(|(_, is_header)| *is_header).unwrap_or(0);
    let mut rows = rows.into_iter().skip(header_idx);
    let (columns, _) = rows.next().ok_or(ParseError::NoHeader)?;

    Ok(Table { columns, rows: rows.map(|(cells, _)| cells).collect() })
}
