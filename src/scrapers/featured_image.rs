//! Featured image from the JPL space images gallery.
//!
//! The gallery only shows the full-size image after its "full image" button
//! is pressed, which opens a fancybox overlay holding the `<img>`.

use crate::error::{Result, ScrapeError};
use crate::session::BrowserSession;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{info, instrument, warn};

/// Tag of the gallery's interactive controls.
pub const BUTTON_TAG: &str = "button";
/// Position of the "full image" control among the page's buttons.
pub const FULL_IMAGE_BUTTON_INDEX: usize = 1;

static FANCYBOX_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img.fancybox-image").unwrap());

/// Open the gallery, expand the full image and return its absolute URL.
///
/// # Errors
///
/// [`ScrapeError::MissingControl`] when the page has fewer buttons than
/// [`FULL_IMAGE_BUTTON_INDEX`] needs. That is a broken page, not an absent
/// image, so it is not folded into `Ok(None)`.
#[instrument(level = "info", skip(session))]
pub async fn scrape_featured_image<S: BrowserSession>(
    session: &S,
    url: &str,
) -> Result<Option<String>> {
    session.visit(url).await?;

    let buttons = session.find_by_tag(BUTTON_TAG).await?;
    let full_image = buttons
        .get(FULL_IMAGE_BUTTON_INDEX)
        .ok_or(ScrapeError::MissingControl {
            tag: BUTTON_TAG,
            index: FULL_IMAGE_BUTTON_INDEX,
            found: buttons.len(),
        })?;
    session.click(full_image).await?;

    let html = session.html().await?;
    let image_url = parse_featured_image(&html, url);
    match &image_url {
        Some(image_url) => info!(%image_url, "Scraped featured image"),
        None => warn!("Full image view has no fancybox image"),
    }
    Ok(image_url)
}

/// Absolute URL of the expanded image, `{base_url}/{src}`.
pub fn parse_featured_image(html: &str, base_url: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let src = document.select(&FANCYBOX_IMAGE).next()?.value().attr("src")?;
    Some(format!("{base_url}/{src}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::FakeSession;

    const GALLERY_URL: &str = "https://spaceimages-mars.com";

    const EXPANDED: &str = r#"<html><body>
        <div class="fancybox-inner">
          <img class="fancybox-image" src="image/featured/mars2.jpg" alt="">
        </div>
    </body></html>"#;

    #[test]
    fn test_parse_builds_absolute_url() {
        assert_eq!(
            parse_featured_image(EXPANDED, GALLERY_URL).as_deref(),
            Some("https://spaceimages-mars.com/image/featured/mars2.jpg")
        );
    }

    #[test]
    fn test_parse_missing_image() {
        assert!(parse_featured_image("<img class=\"thumb\" src=\"a.jpg\">", GALLERY_URL).is_none());
        assert!(parse_featured_image("<img class=\"fancybox-image\">", GALLERY_URL).is_none());
    }

    #[tokio::test]
    async fn test_clicks_full_image_button() {
        let session = FakeSession::new().with_buttons(GALLERY_URL, 3, EXPANDED);

        let url = scrape_featured_image(&session, GALLERY_URL).await.unwrap();
        assert_eq!(
            url.as_deref(),
            Some("https://spaceimages-mars.com/image/featured/mars2.jpg")
        );
    }

    #[tokio::test]
    async fn test_no_buttons_is_fatal() {
        let session = FakeSession::new().with_page(GALLERY_URL, "<html><body></body></html>");

        let err = scrape_featured_image(&session, GALLERY_URL).await.unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::MissingControl { index: 1, found: 0, .. }
        ));
    }

    #[tokio::test]
    async fn test_single_button_is_fatal() {
        let session = FakeSession::new().with_buttons(GALLERY_URL, 1, EXPANDED);

        let err = scrape_featured_image(&session, GALLERY_URL).await.unwrap_err();
        assert!(matches!(err, ScrapeError::MissingControl { found: 1, .. }));
    }

    #[tokio::test]
    async fn test_expanded_view_without_image() {
        let session = FakeSession::new().with_buttons(GALLERY_URL, 2, "<html></html>");
        assert!(scrape_featured_image(&session, GALLERY_URL).await.unwrap().is_none());
    }
}
