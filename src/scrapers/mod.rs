//! Page extractors, one per target site.
//!
//! | Page | Module | Method | Notes |
//! |------|--------|--------|-------|
//! | Mars news listing | [`news`] | Browser | Waits briefly for the listing to render |
//! | JPL space images | [`featured_image`] | Browser | Clicks the second `<button>` |
//! | Mars facts | [`facts`] | HTTP | First table, keyed by the comparison columns |
//! | Mars hemispheres | [`hemispheres`] | Browser | Index page plus one detail page each |
//!
//! # Common Patterns
//!
//! Each extractor returns `Result<Option<T>>`:
//! - `Ok(Some(_))`: the page had the expected shape
//! - `Ok(None)`: an expected element was missing; the run carries on
//! - `Err(_)`: the browser or page broke in a way the run cannot absorb
//!
//! Markup parsing lives in plain `parse_*` functions so it can be tested
//! against fixtures without a browser.

pub mod facts;
pub mod featured_image;
pub mod hemispheres;
pub mod news;
