//! Runs every extractor in turn and assembles the [`ScrapeResult`].
//!
//! The orchestrator owns the browser session for the whole run. Extractors
//! borrow it one at a time; once they are done (or one of them fails, or
//! panics) the session is closed exactly once before the outcome is handed
//! back.

use crate::config::{Config, SiteConfig};
use crate::error::Result;
use crate::models::ScrapeResult;
use crate::scrapers::{facts, featured_image, hemispheres, news};
use crate::session::{BrowserSession, ChromeSession};
use chrono::Local;
use futures::FutureExt;
use reqwest::Client;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Open a headless Chrome session and run every extractor against the
/// configured sites.
#[instrument(level = "info", skip_all, fields(webdriver_url = %config.webdriver_url))]
pub async fn scrape_all(config: &Config, client: &Client) -> Result<ScrapeResult> {
    let session = ChromeSession::open(&config.webdriver_url).await?;
    run(session, &config.sites, config.news_wait(), client).await
}

/// Run every extractor on `session`, then close it.
///
/// # Errors
///
/// Whatever fatal error an extractor raised, after the session is closed. A
/// failure to close after a clean run is logged and the record is still
/// returned.
pub async fn run<S: BrowserSession>(
    session: S,
    sites: &SiteConfig,
    news_wait: Duration,
    client: &Client,
) -> Result<ScrapeResult> {
    let outcome = AssertUnwindSafe(extract_all(&session, sites, news_wait, client))
        .catch_unwind()
        .await;
    let closed = session.close().await;

    let result = match outcome {
        Ok(result) => result,
        Err(payload) => panic::resume_unwind(payload),
    };
    if let Err(e) = closed {
        error!(error = %e, "Failed to close browser session");
    }
    result
}

#[instrument(level = "info", skip_all)]
async fn extract_all<S: BrowserSession>(
    session: &S,
    sites: &SiteConfig,
    news_wait: Duration,
    client: &Client,
) -> Result<ScrapeResult> {
    let headline = news::scrape_news(session, &sites.news_url, news_wait).await?;
    let featured_image_url = featured_image::scrape_featured_image(session, &sites.image_url).await?;
    let facts_markup = facts::scrape_facts(client, &sites.facts_url).await?;
    let hemisphere_images = hemispheres::scrape_hemispheres(session, &sites.hemispheres_url).await?;

    let (news_title, news_paragraph) = match headline {
        Some(h) => (Some(h.title), Some(h.paragraph)),
        None => (None, None),
    };

    let result = ScrapeResult {
        news_title,
        news_paragraph,
        featured_image_url,
        facts_markup,
        hemisphere_images,
        generated_at: Local::now(),
    };
    info!(
        missing = result.missing_fields(),
        hemispheres = result.hemisphere_images.as_ref().map_or(0, Vec::len),
        "Scrape complete"
    );
    Ok(result)
}
