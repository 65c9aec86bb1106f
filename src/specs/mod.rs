// src/specs/mod.rs
//! # Page specs
//!
//! How to read the directory's pages. Each spec knows *where the data lives in
//! the HTML* and *how to pull it out tolerantly*; it never fetches, never
//! caches, and never decides when to stop paginating.
//!
//! ## Conventions
//! - Selectors come from `config::selectors`, never inline string literals.
//! - Missing pieces degrade to sentinels (`"N/A"`, `"No data found"`), never errors.
//! - Output order is document order.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::run_scrape_with → scrape::aggregate
//!                                         ├─ core::net::Fetch::fetch
//!                                         └─ specs::listing::Extractor::parse_page
//! ```
pub mod listing;
