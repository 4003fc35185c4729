//! HTML table to grid, and grid back to a styled HTML table.
//!
//! The facts extractor only talks to this module through
//! [`parse_first_table`] and [`render_styled_table`], so the keying logic on
//! top of the grid does not care how tables are read or written.

use crate::error::Result;
use askama::Template;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());

/// Rows and columns read from an HTML table.
///
/// Columns are labelled by position (`"0"`, `"1"`, ...) until a header row is
/// promoted. Short rows are padded with empty cells so every row is as wide as
/// the widest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A grid whose rows are identified by a composite key.
///
/// Key columns render as row headers and never as data columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedGrid {
    pub key_columns: Vec<String>,
    pub value_columns: Vec<String>,
    pub rows: Vec<KeyedRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedRow {
    pub key: Vec<String>,
    pub values: Vec<String>,
}

/// Read the first `<table>` in `html`.
///
/// Rows under `<thead>` are column labels, not data, and are left out so the
/// first body row is the one a caller promotes to the header. Returns `None`
/// when the page has no table or the table has no body rows. Nested tables are
/// not flattened into the outer one.
pub fn parse_first_table(html: &str) -> Option<Grid> {
    let document = Html::parse_document(html);
    let table = document.select(&TABLE).next()?;

    let mut rows: Vec<Vec<String>> = table
        .select(&ROW)
        .filter(|row| owning_table(*row).map(|t| t.id()) == Some(table.id()))
        .filter(|row| !in_thead(*row))
        .map(|row| row_cells(row).map(cell_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    let width = rows.iter().map(Vec::len).max()?;
    for row in &mut rows {
        row.resize(width, String::new());
    }

    Some(Grid {
        columns: (0..width).map(|i| i.to_string()).collect(),
        rows,
    })
}

/// Render `grid` as an HTML table carrying `classes` on the `<table>` tag.
///
/// The header has two rows when there are data columns (column labels, then
/// key names) and one row of key names otherwise. Cell text is escaped.
pub fn render_styled_table(grid: &KeyedGrid, classes: &[&str]) -> Result<String> {
    let table = StyledTable {
        classes: classes.join(" "),
        key_columns: &grid.key_columns,
        value_columns: &grid.value_columns,
        rows: &grid.rows,
    };
    Ok(table.render()?)
}

#[derive(Template)]
#[template(path = "facts_table.html")]
struct StyledTable<'a> {
    classes: String,
    key_columns: &'a [String],
    value_columns: &'a [String],
    rows: &'a [KeyedRow],
}

/// Direct `<th>`/`<td>` children of a row.
fn row_cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "th" | "td"))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().join("").split_whitespace().join(" ")
}

fn in_thead(row: ElementRef<'_>) -> bool {
    row.parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|section| section.value().name() == "thead")
}

/// The nearest `<table>` ancestor of a row.
fn owning_table(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}
