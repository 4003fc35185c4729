//! Small helpers for logging and the file system.

use crate::error::Result;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Keeps the first `max` characters and appends how many bytes were cut.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file so
/// permission problems surface before any scraping starts.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    fs::File::create(&probe_path).await?;
    let _ = fs::remove_file(&probe_path).await;
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // Cutting inside a multibyte char would panic with byte slicing.
        let s = "×".repeat(10);
        assert_eq!(truncate_for_log(&s, 3), "×××…(+14 bytes)");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_dir() {
        let dir = std::env::temp_dir().join(format!("mars_scrape_probe_{}", std::process::id()));
        let dir = dir.to_str().unwrap().to_string();

        ensure_writable_dir(&dir).await.unwrap();
        assert!(std::path::Path::new(&dir).is_dir());
        assert!(!fs::try_exists(format!("{dir}/..__probe_write__")).await.unwrap());
        let _ = fs::remove_dir_all(&dir).await;
    }
}
