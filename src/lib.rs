// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod cursor;
pub mod gui;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::options::{AppOptions, NetOptions, ScrapeOptions, Specialization};
pub use cursor::Cursor;
pub use error::{EmptyStateError, ScrapeError, ScrapeFailure, TransportError};
pub use scrape::{CancelToken, Listing, aggregate, run_scrape, run_scrape_with};
pub use specs::listing::{Extractor, PageResult, Record};
