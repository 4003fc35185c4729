//! Run configuration: target sites, WebDriver endpoint and the news wait.
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! webdriver_url: http://chrome:4444/wd/hub
//! sites:
//!   facts_url: https://galaxyfacts-mars.com
//! ```

use crate::error::{Result, ScrapeError};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

/// The four pages a run visits.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// News listing page.
    pub news_url: String,
    /// Image gallery. Also the prefix for the featured image's relative `src`.
    pub image_url: String,
    /// Page carrying the Mars/Earth comparison table.
    pub facts_url: String,
    /// Hemisphere index. Detail links and sample hrefs are appended to it as is,
    /// so keep the trailing slash.
    pub hemispheres_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            news_url: "https://redplanetscience.com".to_string(),
            image_url: "https://spaceimages-mars.com".to_string(),
            facts_url: "https://galaxyfacts-mars.com".to_string(),
            hemispheres_url: "https://marshemispheres.com/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub sites: SiteConfig,
    /// WebDriver server the headless browser session is created through.
    pub webdriver_url: String,
    /// How long the news extractor waits for the listing to render.
    pub news_wait_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sites: SiteConfig::default(),
            webdriver_url: "http://localhost:9515".to_string(),
            news_wait_ms: 1000,
        }
    }
}

impl Config {
    pub fn news_wait(&self) -> Duration {
        Duration::from_millis(self.news_wait_ms)
    }

    /// Reject any URL that does not parse, naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let urls = [
            ("webdriver_url", &self.webdriver_url),
            ("sites.news_url", &self.sites.news_url),
            ("sites.image_url", &self.sites.image_url),
            ("sites.facts_url", &self.sites.facts_url),
            ("sites.hemispheres_url", &self.sites.hemispheres_url),
        ];
        for (key, value) in urls {
            Url::parse(value)
                .map_err(|e| ScrapeError::Config(format!("{key} = {value:?}: {e}")))?;
        }
        Ok(())
    }
}

/// Parse and validate a YAML config document.
pub fn from_yaml(yaml: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`, or the defaults when no path is given.
#[instrument(level = "info")]
pub async fn load_config(path: Option<&str>) -> Result<Config> {
    let Some(path) = path else {
        info!("No config file given; using default sites");
        return Ok(Config::default());
    };

    let yaml = tokio::fs::read_to_string(path).await?;
    let config = from_yaml(&yaml)?;
    info!(path, webdriver_url = %config.webdriver_url, "Loaded configuration");
    Ok(config)
}
