//! # Mars Scrape
//!
//! Collects the latest Mars content from four fixed sites into a single
//! record: the top news headline and teaser, the JPL featured image, the
//! Mars/Earth facts table as a styled HTML fragment, and the full-resolution
//! image of each hemisphere.
//!
//! ## Usage
//!
//! ```sh
//! chromedriver --port=9515 &
//! mars_scrape --pretty
//! ```
//!
//! ## Architecture
//!
//! One run is strictly sequential:
//! 1. **Session**: open one headless Chrome session over WebDriver
//! 2. **Extraction**: news, featured image, facts (plain HTTP), hemispheres
//! 3. **Teardown**: close the session, whatever happened during extraction
//! 4. **Output**: print the JSON record, or write it under `--output-dir`

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod orchestrator;
mod outputs;
mod scrapers;
mod session;
mod table;
mod utils;

use cli::Cli;
use outputs::json;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // stdout carries the record, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("mars_scrape starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.output_dir, "Parsed CLI arguments");

    let mut config = config::load_config(args.config.as_deref()).await?;
    if let Some(webdriver_url) = args.webdriver_url {
        config.webdriver_url = webdriver_url;
        config.validate()?;
    }

    // Fail on an unwritable output dir before spending a browser session.
    if let Some(ref dir) = args.output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "Output directory is not writable");
            return Err(e.into());
        }
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let result = match orchestrator::scrape_all(&config, &client).await {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Scrape run failed");
            return Err(e.into());
        }
    };

    match args.output_dir {
        Some(ref dir) => {
            json::write_result(&result, dir).await?;
        }
        None => println!("{}", json::to_json(&result, args.pretty)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        missing = result.missing_fields(),
        "Execution complete"
    );

    Ok(())
}
