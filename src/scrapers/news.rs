//! Latest headline from the Mars news listing.
//!
//! The listing is rendered client-side, so the page is loaded in the browser
//! and given a short moment for the first `div.list_text` block to appear
//! before the markup is captured.

use crate::error::Result;
use crate::models::NewsHeadline;
use crate::session::BrowserSession;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// CSS for the block holding one article on the listing.
pub const LIST_TEXT: &str = "div.list_text";

static LIST_TEXT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(LIST_TEXT).unwrap());
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.content_title").unwrap());
static TEASER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article_teaser_body").unwrap());

/// Visit the news listing and pull the first article's title and teaser.
///
/// # Returns
///
/// `Ok(None)` when the listing block or either of its parts is missing. Only
/// browser failures are errors.
#[instrument(level = "info", skip(session))]
pub async fn scrape_news<S: BrowserSession>(
    session: &S,
    url: &str,
    wait: Duration,
) -> Result<Option<NewsHeadline>> {
    session.visit(url).await?;

    // Best effort: a slow render just means we parse what is there.
    if !session.is_element_present(LIST_TEXT, wait).await? {
        debug!(?wait, "News listing not rendered within wait");
    }

    let html = session.html().await?;
    let headline = parse_news(&html);
    match &headline {
        Some(h) => info!(title = %h.title, "Scraped news headline"),
        None => warn!(
            preview = %truncate_for_log(&html, 200),
            "News listing missing expected elements"
        ),
    }
    Ok(headline)
}

/// Pull the first headline out of listing markup.
pub fn parse_news(html: &str) -> Option<NewsHeadline> {
    let document = Html::parse_document(html);
    let slide = document.select(&LIST_TEXT_SELECTOR).next()?;

    let title = slide.select(&TITLE_SELECTOR).next()?.text().collect::<String>();
    let paragraph = slide.select(&TEASER_SELECTOR).next()?.text().collect::<String>();

    Some(NewsHeadline { title, paragraph })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::FakeSession;

    const NEWS_URL: &str = "https://redplanetscience.com";

    const LISTING: &str = r#"<html><body>
        <div id="news">
          <div class="list_text">
            <div class="list_date">May 6, 2025</div>
            <div class="content_title">Mars rover finds rocks</div>
            <div class="article_teaser_body">Details follow.</div>
          </div>
          <div class="list_text">
            <div class="content_title">Older story</div>
            <div class="article_teaser_body">Older teaser.</div>
          </div>
        </div>
    </body></html>"#;

    #[test]
    fn test_parse_first_headline() {
        let headline = parse_news(LISTING).unwrap();
        assert_eq!(headline.title, "Mars rover finds rocks");
        assert_eq!(headline.paragraph, "Details follow.");
    }

    #[test]
    fn test_missing_listing_block() {
        assert!(parse_news("<html><body><div class=\"news\"></div></body></html>").is_none());
    }

    #[test]
    fn test_missing_teaser_drops_title_too() {
        let html = r#"<div class="list_text"><div class="content_title">Only a title</div></div>"#;
        assert!(parse_news(html).is_none());
    }

    #[test]
    fn test_parts_outside_first_block_are_ignored() {
        let html = r#"
            <div class="list_text"><div class="content_title">Title</div></div>
            <div class="list_text"><div class="article_teaser_body">Teaser</div></div>"#;
        assert!(parse_news(html).is_none());
    }

    #[tokio::test]
    async fn test_scrape_news_through_session() {
        let session = FakeSession::new().with_page(NEWS_URL, LISTING);

        let headline = scrape_news(&session, NEWS_URL, Duration::from_millis(10))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            (headline.title.as_str(), headline.paragraph.as_str()),
            ("Mars rover finds rocks", "Details follow.")
        );
        assert_eq!(session.visits(), vec![NEWS_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_wait_timeout_still_parses_page() {
        let session = FakeSession::new()
            .with_page(NEWS_URL, LISTING)
            .without_element(LIST_TEXT);

        let headline = scrape_news(&session, NEWS_URL, Duration::from_millis(10))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(headline.title, "Mars rover finds rocks");
    }

    #[tokio::test]
    async fn test_wait_timeout_on_empty_page_is_absent() {
        let session = FakeSession::new()
            .with_page(NEWS_URL, "<html><body></body></html>")
            .without_element(LIST_TEXT);

        let headline = scrape_news(&session, NEWS_URL, Duration::ZERO).await.unwrap();
        assert!(headline.is_none());
    }

    #[tokio::test]
    async fn test_scrape_news_empty_page() {
        let session = FakeSession::new().with_page(NEWS_URL, "<html></html>");
        let headline = scrape_news(&session, NEWS_URL, Duration::ZERO).await.unwrap();
        assert!(headline.is_none());
    }
}
