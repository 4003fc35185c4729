//! Full-resolution images of the four Mars hemispheres.
//!
//! The index page lists one `div.description` per hemisphere inside
//! `div.collapsible.results`. Each listing links to a detail page whose
//! "Sample" anchor points at the full-resolution image.
//!
//! Extraction is all or nothing: one malformed listing or detail page and the
//! whole batch comes back `None`.

use crate::error::Result;
use crate::models::HemisphereEntry;
use crate::session::BrowserSession;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};

/// Visible text of the anchor linking the full-resolution image.
pub const SAMPLE_LINK_TEXT: &str = "Sample";

static RESULTS: Lazy<Selector> = Lazy::new(|| Selector::parse("div.collapsible.results").unwrap());
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| Selector::parse("div.description").unwrap());
static ITEM_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.itemLink.product-item").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// One listing on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Detail page href, relative to the index URL.
    pub href: String,
    pub title: String,
}

/// Walk the hemisphere index and every detail page it links to.
///
/// Detail pages are visited in listing order on the same session. Returns
/// `Ok(None)` as soon as any listing or detail page is missing what we need.
#[instrument(level = "info", skip(session))]
pub async fn scrape_hemispheres<S: BrowserSession>(
    session: &S,
    url: &str,
) -> Result<Option<Vec<HemisphereEntry>>> {
    session.visit(url).await?;
    let html = session.html().await?;

    let Some(listings) = parse_listings(&html) else {
        warn!("Hemisphere index has no results");
        return Ok(None);
    };
    debug!(count = listings.len(), "Found hemisphere listings");

    let mut entries = Vec::with_capacity(listings.len());
    for (index, listing) in listings.into_iter().enumerate() {
        let Some(listing) = listing else {
            warn!(index, "Hemisphere listing is malformed; dropping batch");
            return Ok(None);
        };

        let detail_url = format!("{url}{}", listing.href);
        session.visit(&detail_url).await?;
        let detail = session.html().await?;

        let Some(sample_href) = parse_sample_href(&detail) else {
            warn!(index, %detail_url, "Detail page has no sample link; dropping batch");
            return Ok(None);
        };

        debug!(index, title = %listing.title, "Resolved hemisphere");
        entries.push(HemisphereEntry {
            image_url: format!("{url}{sample_href}"),
            title: listing.title,
        });
    }

    info!(count = entries.len(), "Scraped hemisphere images");
    Ok(Some(entries))
}

/// Listings on the index page, in document order.
///
/// `None` when the results container or its entries are missing. A listing
/// without a detail link or heading is kept as `None` in place, so the caller
/// decides when in the walk to give up.
pub fn parse_listings(html: &str) -> Option<Vec<Option<Listing>>> {
    let document = Html::parse_document(html);
    let results = document.select(&RESULTS).next()?;

    let listings: Vec<Option<Listing>> = results.select(&DESCRIPTION).map(parse_listing).collect();
    if listings.is_empty() {
        return None;
    }
    Some(listings)
}

fn parse_listing(item: ElementRef<'_>) -> Option<Listing> {
    let href = item.select(&ITEM_LINK).next()?.value().attr("href")?;
    let title = item.select(&HEADING).next()?.text().collect::<String>();
    Some(Listing {
        href: href.to_string(),
        title,
    })
}

/// Href of the first anchor whose text is exactly [`SAMPLE_LINK_TEXT`].
pub fn parse_sample_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR)
        .find(|a| a.text().collect::<String>() == SAMPLE_LINK_TEXT)?
        .value()
        .attr("href")
        .map(str::to_string)
}
