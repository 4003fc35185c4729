//! Fatal error channel.
//!
//! Structural misses on a page are not errors: extractors absorb them and
//! return `None`. Everything in [`ScrapeError`] aborts the run and reaches the
//! caller of the orchestrator after the browser session has been closed.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// A [`BrowserSession`](crate::session::BrowserSession) failure that is
    /// not a WebDriver protocol error, such as reading a page before any
    /// navigation or a session backend refusing to navigate.
    #[error("Session error: {0}")]
    Session(String),

    /// The page has fewer `<{tag}>` controls than the one we need to click.
    #[error("expected <{tag}> control at index {index}, page has {found}")]
    MissingControl {
        tag: &'static str,
        index: usize,
        found: usize,
    },

    #[error("table has no column named {0:?}")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
