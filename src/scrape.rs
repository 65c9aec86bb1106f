// src/scrape.rs
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    config::{
        consts::{COUNT_MISSING, FIRST_PAGE},
        options::{AppOptions, ScrapeOptions, Specialization},
    },
    core::{
        net::{Fetch, HttpFetcher},
        sanitize::normalize_ws,
    },
    error::{ScrapeError, ScrapeFailure},
    progress::Progress,
    specs::listing::{Extractor, Record},
};

/// Result of one aggregation run: the first page's total label and every
/// record in page order, then document order within a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub total_count_label: String,
    pub records: Vec<Record>,
    pub pages_fetched: u32,
}

impl Listing {
    pub fn empty() -> Self {
        Self { total_count_label: s!(COUNT_MISSING), records: Vec::new(), pages_fetched: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self::empty()
    }
}

/// Shared stop flag, checked before every page request.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Scrape every results page for `location` / `specialization` with default options.
pub fn run_scrape(location: &str, specialization: Specialization) -> Result<Listing, ScrapeFailure> {
    let opts = AppOptions {
        scrape: ScrapeOptions::new(location, specialization),
        ..AppOptions::default()
    };
    run_scrape_with(&opts, None, None)
}

/// Same as [`run_scrape`], with explicit options, progress sink and cancellation.
pub fn run_scrape_with(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
    cancel: Option<&CancelToken>,
) -> Result<Listing, ScrapeFailure> {
    let extractor = Extractor::new(&opts.scrape.selectors)
        .map_err(|e| ScrapeFailure::new(e.into(), Listing::empty()))?;

    let fetcher = HttpFetcher::new(&opts.net).map_err(|source| {
        ScrapeFailure::new(ScrapeError::Transport { page: FIRST_PAGE, source }, Listing::empty())
    })?;

    aggregate(&fetcher, &extractor, &opts.scrape, progress, cancel)
}

/// Fetch → extract → check for a next page, from page 1 until the site stops
/// linking onward. The first failed fetch ends the run; the records gathered
/// so far travel with the error.
pub fn aggregate(
    fetcher: &dyn Fetch,
    extractor: &Extractor,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
    cancel: Option<&CancelToken>,
) -> Result<Listing, ScrapeFailure> {
    let location = normalize_ws(&opts.location);
    if location.is_empty() {
        return Err(ScrapeFailure::new(ScrapeError::EmptyLocation, Listing::empty()));
    }

    let slug = opts.specialization.slug();
    let limit = opts.page_limit();

    logf!("Scrape: Begin location={:?} specialization={} max_pages={}", location, slug, limit);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(limit);
    }

    let mut total: Option<String> = None;
    let mut records: Vec<Record> = Vec::new();
    let mut fetched = 0u32;
    let mut page = FIRST_PAGE;

    let outcome = loop {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            break Err(ScrapeError::Cancelled { page });
        }

        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching page {page}…"));
        }

        let markup = match fetcher.fetch(&location, slug, page) {
            Ok(m) => m,
            Err(source) => break Err(ScrapeError::Transport { page, source }),
        };
        fetched += 1;

        let parsed = extractor.parse_page(&markup);
        let on_page = parsed.records.len();

        // First successful page wins; later pages' counts are ignored.
        total.get_or_insert(parsed.total_count_label);
        records.extend(parsed.records);

        logd!("Scrape: page={} records={} more={}", page, on_page, parsed.has_more);
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, on_page, records.len());
        }

        if !parsed.has_more {
            break Ok(());
        }
        if page >= limit {
            break Err(ScrapeError::PaginationLimit { limit });
        }
        page += 1;
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let listing = Listing {
        total_count_label: total.unwrap_or_else(|| s!(COUNT_MISSING)),
        records,
        pages_fetched: fetched,
    };

    match outcome {
        Ok(()) => {
            logf!("Scrape: OK pages={} records={}", listing.pages_fetched, listing.records.len());
            Ok(listing)
        }
        Err(error) => {
            loge!("Scrape: {} (kept {} records)", error, listing.records.len());
            Err(ScrapeFailure::new(error, listing))
        }
    }
}
