//! Mars/Earth comparison table.
//!
//! The facts page is static, so it is fetched over plain HTTP and never
//! touches the browser session. The first table on the page is re-keyed by
//! its three comparison columns and re-rendered as a styled fragment ready to
//! drop into a Bootstrap page.

use crate::error::{Result, ScrapeError};
use crate::table::{self, Grid, KeyedGrid, KeyedRow};
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Columns that together identify a row of the comparison table.
pub const KEY_COLUMNS: [&str; 3] = ["Mars - Earth Comparison", "Mars", "Earth"];

/// Classes on the rendered `<table>`.
pub const TABLE_CLASSES: [&str; 4] = [
    "dataframe",
    "table-responsive",
    "table-striped",
    "table-hover",
];

/// Fetch the facts page and render its comparison table.
///
/// Any failure to fetch the page or find a table on it yields `Ok(None)`.
///
/// # Errors
///
/// [`ScrapeError::MissingColumn`] when a table is found but lacks one of the
/// [`KEY_COLUMNS`].
#[instrument(level = "info", skip(client))]
pub async fn scrape_facts(client: &Client, url: &str) -> Result<Option<String>> {
    let html = match fetch_page(client, url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(error = %e, "Facts page fetch failed");
            return Ok(None);
        }
    };

    let markup = facts_from_html(&html)?;
    if markup.is_some() {
        info!("Rendered facts table");
    } else {
        warn!("Facts page has no table");
    }
    Ok(markup)
}

async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let body = client.get(url).send().await?.error_for_status()?.text().await?;
    Ok(body)
}

/// Render the first table in `html`, keyed by [`KEY_COLUMNS`].
pub fn facts_from_html(html: &str) -> Result<Option<String>> {
    let Some(grid) = table::parse_first_table(html) else {
        return Ok(None);
    };
    let keyed = set_row_key(promote_header(grid), &KEY_COLUMNS)?;
    Ok(Some(table::render_styled_table(&keyed, &TABLE_CLASSES)?))
}

/// Use the first row as column labels and drop it from the data.
pub fn promote_header(mut grid: Grid) -> Grid {
    if !grid.rows.is_empty() {
        grid.columns = grid.rows.remove(0);
    }
    grid
}

/// Move `keys` out of the data columns and into each row's composite key.
///
/// Key order follows `keys`; the remaining columns keep their table order.
pub fn set_row_key(grid: Grid, keys: &[&str]) -> Result<KeyedGrid> {
    let key_idx = keys
        .iter()
        .map(|key| {
            grid.columns
                .iter()
                .position(|c| c == key)
                .ok_or_else(|| ScrapeError::MissingColumn(key.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    let value_idx: Vec<usize> = (0..grid.columns.len())
        .filter(|i| !key_idx.contains(i))
        .collect();

    let rows = grid
        .rows
        .iter()
        .map(|row| KeyedRow {
            key: key_idx.iter().map(|&i| row[i].clone()).collect(),
            values: value_idx.iter().map(|&i| row[i].clone()).collect(),
        })
        .collect();

    Ok(KeyedGrid {
        key_columns: key_idx.iter().map(|&i| grid.columns[i].clone()).collect(),
        value_columns: value_idx.iter().map(|&i| grid.columns[i].clone()).collect(),
        rows,
    })
}
