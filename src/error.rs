// src/error.rs
use std::fmt;

use thiserror::Error;

use crate::scrape::Listing;

/// A single page fetch that did not produce a body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("cannot build request URL: {0}")]
    Url(String),
}

/// Why an aggregation run did not complete.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("location must not be empty")]
    EmptyLocation,

    #[error("fetching page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: TransportError,
    },

    #[error("pagination limit exceeded: page {limit} still links to a next page")]
    PaginationLimit { limit: u32 },

    #[error("cancelled before page {page}")]
    Cancelled { page: u32 },

    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// A failed run together with whatever was gathered before it failed.
#[derive(Debug)]
pub struct ScrapeFailure {
    pub error: ScrapeError,
    pub partial: Listing,
}

impl ScrapeFailure {
    pub fn new(error: ScrapeError, partial: Listing) -> Self {
        Self { error, partial }
    }

    pub fn is_partial(&self) -> bool {
        !self.partial.records.is_empty()
    }
}

impl fmt::Display for ScrapeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} record(s) gathered before failure)", self.error, self.partial.records.len())
    }
}

impl std::error::Error for ScrapeFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// A selector table entry the parser rejected.
#[derive(Debug, Error)]
#[error("invalid selector `{selector}`: {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

/// `Cursor::current` on a cursor with nothing loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no records loaded")]
pub struct EmptyStateError;
