//! Output of the scrape record.
//!
//! # Submodules
//!
//! - [`json`]: Serializes a `ScrapeResult` for stdout or writes it to a file
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── 2025-05-06/
//!     ├── mars_083000.json
//!     └── mars_201500.json
//! ```

pub mod json;
