//! Browser session seam.
//!
//! The extractors only need four things from a browser: go to a URL, hand back
//! the rendered HTML, wait for an element, and click one. [`BrowserSession`]
//! names exactly those, so production runs drive headless Chrome over
//! WebDriver ([`ChromeSession`]) while tests drive an in-memory double.
//!
//! A session is owned by the orchestrator and borrowed by each extractor for
//! the duration of its call. `close` consumes the session, so it cannot be
//! used after teardown.

use crate::error::Result;
use std::time::Duration;
use thirtyfour::prelude::ElementQueryable;
use thirtyfour::{By, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver, WebElement};
use tracing::{info, instrument};

/// Poll interval while waiting for an element to appear.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A live, controllable browser.
pub trait BrowserSession {
    /// Handle to an element found on the current page.
    type Element;

    /// Navigate to `url` and block until the page has loaded.
    async fn visit(&self, url: &str) -> Result<()>;

    /// Fully rendered markup of the current page.
    async fn html(&self) -> Result<String>;

    /// Wait up to `wait` for `css` to match. `Ok(false)` on timeout.
    async fn is_element_present(&self, css: &str, wait: Duration) -> Result<bool>;

    /// All elements with the given tag name, in document order.
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Self::Element>>;

    async fn click(&self, element: &Self::Element) -> Result<()>;

    /// Tear the session down and release the browser.
    async fn close(self) -> Result<()>;
}

/// Headless Chrome driven through a WebDriver server (chromedriver or a
/// Selenium grid).
pub struct ChromeSession {
    driver: WebDriver,
}

impl ChromeSession {
    /// Start a headless Chrome session for unattended runs.
    ///
    /// # Errors
    ///
    /// Fails when the WebDriver server is unreachable or refuses the
    /// capabilities. There is no retry; the run cannot continue without a
    /// browser.
    #[instrument(level = "info")]
    pub async fn open(webdriver_url: &str) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;
        caps.set_no_sandbox()?;
        caps.set_disable_gpu()?;

        let driver = WebDriver::new(webdriver_url, caps).await?;
        info!("Browser session opened");
        Ok(Self { driver })
    }
}

impl BrowserSession for ChromeSession {
    type Element = WebElement;

    #[instrument(level = "debug", skip(self))]
    async fn visit(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn html(&self) -> Result<String> {
        Ok(self.driver.source().await?)
    }

    #[instrument(level = "debug", skip(self))]
    async fn is_element_present(&self, css: &str, wait: Duration) -> Result<bool> {
        let present = self
            .driver
            .query(By::Css(css.to_string()))
            .wait(wait, WAIT_POLL_INTERVAL)
            .exists()
            .await?;
        Ok(present)
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<WebElement>> {
        Ok(self.driver.find_all(By::Tag(tag.to_string())).await?)
    }

    async fn click(&self, element: &WebElement) -> Result<()> {
        element.click().await?;
        Ok(())
    }

    #[instrument(level = "info", skip_all)]
    async fn close(self) -> Result<()> {
        self.driver.quit().await?;
        info!("Browser session closed");
        Ok(())
    }
}
