//! JSON output of the scrape record.
//!
//! Files are grouped by the local date of the run and named after its time,
//! so repeated runs on the same day never overwrite each other:
//!
//! ```text
//! output_dir/
//! └── 2025-05-06/
//!     └── mars_201500.json
//! ```

use crate::error::Result;
use crate::models::ScrapeResult;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `result`, optionally pretty-printed.
pub fn to_json(result: &ScrapeResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Where a record generated at `result.generated_at` lands under `output_dir`.
pub fn output_path(result: &ScrapeResult, output_dir: &str) -> PathBuf {
    let date = result.generated_at.format("%Y-%m-%d").to_string();
    let file = format!("mars_{}.json", result.generated_at.format("%H%M%S"));
    Path::new(output_dir).join(date).join(file)
}

/// Write `result` as JSON to `{output_dir}/{date}/mars_{HHMMSS}.json`.
///
/// # Returns
///
/// The path written to.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_result(result: &ScrapeResult, output_dir: &str) -> Result<PathBuf> {
    let json = to_json(result, true)?;
    let path = output_path(result, output_dir);

    if let Some(dir) = path.parent() {
        info!(dir = %dir.display(), "Ensuring JSON directory exists");
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote scrape record");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn result_at(h: u32, m: u32, s: u32) -> ScrapeResult {
        ScrapeResult {
            news_title: Some("Title".to_string()),
            news_paragraph: Some("Teaser".to_string()),
            featured_image_url: None,
            facts_markup: None,
            hemisphere_images: None,
            generated_at: Local.with_ymd_and_hms(2025, 5, 6, h, m, s).unwrap(),
        }
    }

    #[test]
    fn test_output_path() {
        let path = output_path(&result_at(20, 15, 0), "/tmp/out");
        assert_eq!(path, PathBuf::from("/tmp/out/2025-05-06/mars_201500.json"));
    }

    #[test]
    fn test_to_json_compact_and_pretty() {
        let result = result_at(8, 0, 0);
        let compact = to_json(&result, false).unwrap();
        let pretty = to_json(&result, true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert!(compact.contains(r#""news_title":"Title""#));
    }

    #[tokio::test]
    async fn test_write_result_round_trip() {
        let dir = std::env::temp_dir().join(format!("mars_scrape_json_{}", std::process::id()));
        let dir = dir.to_str().unwrap().to_string();
        let result = result_at(9, 30, 5);

        let path = write_result(&result, &dir).await.unwrap();
        let written: ScrapeResult =
            serde_json::from_str(&fs::read_to_string(&path).await.unwrap()).unwrap();

        assert!(path.ends_with("2025-05-06/mars_093005.json"));
        assert_eq!(written.news_title.as_deref(), Some("Title"));
        let _ = fs::remove_dir_all(&dir).await;
    }
}
