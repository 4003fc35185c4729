//! Data models for a single scrape run.
//!
//! - [`ScrapeResult`]: the record produced by the orchestrator
//! - [`HemisphereEntry`]: one hemisphere's full-resolution image and title
//! - [`NewsHeadline`]: the first article on the news listing
//!
//! Field names on the wire follow the keys downstream consumers already read
//! (`featured_image`, `facts`, `img_url`, `last_modified`), hence the renames.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The latest headline and its teaser paragraph.
///
/// Both fields come from the same listing block, so the extractor yields
/// either a complete headline or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsHeadline {
    pub title: String,
    pub paragraph: String,
}

/// One hemisphere listing resolved to its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HemisphereEntry {
    /// Absolute URL of the full-resolution sample image.
    #[serde(rename = "img_url")]
    pub image_url: String,
    /// Heading text from the index page listing.
    pub title: String,
}

/// Everything one run scraped.
///
/// Each optional field is `None` exactly when its extractor found the page in
/// an unexpected shape (or, for the facts table, could not fetch it). A field
/// is never partially populated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapeResult {
    pub news_title: Option<String>,
    pub news_paragraph: Option<String>,
    #[serde(rename = "featured_image")]
    pub featured_image_url: Option<String>,
    /// Styled HTML table fragment of the Mars/Earth comparison.
    #[serde(rename = "facts")]
    pub facts_markup: Option<String>,
    pub hemisphere_images: Option<Vec<HemisphereEntry>>,
    #[serde(rename = "last_modified")]
    pub generated_at: DateTime<Local>,
}

impl ScrapeResult {
    /// Number of fields that came back empty.
    pub fn missing_fields(&self) -> usize {
        [
            self.news_title.is_none(),
            self.featured_image_url.is_none(),
            self.facts_markup.is_none(),
            self.hemisphere_images.is_none(),
        ]
        .into_iter()
        .filter(|missing| *missing)
        .count()
    }
}
