//! Command-line interface definitions for Mars Scrape.
//!
//! Every option has a sensible default, so running the binary with no
//! arguments scrapes the default sites through a local chromedriver and
//! prints the record to stdout.

use clap::Parser;

/// Command-line arguments for the Mars Scrape application.
///
/// # Examples
///
/// ```sh
/// # Print the record as JSON
/// mars_scrape --pretty
///
/// # Use a Selenium grid and keep a copy of each run
/// mars_scrape --webdriver-url http://chrome:4444/wd/hub -o ./runs
///
/// # Point the scrapers at mirrors
/// mars_scrape -c ./mars_scrape.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file (sites, WebDriver URL, news wait)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the record as JSON under this directory instead of printing it
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// WebDriver server to open the headless browser through (overrides the config file)
    #[arg(long, env = "WEBDRIVER_URL")]
    pub webdriver_url: Option<String>,

    /// Pretty-print the JSON written to stdout
    #[arg(short, long)]
    pub pretty: bool,
}
