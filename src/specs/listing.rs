// src/specs/listing.rs
//
// Doctor listing page: total-count banner, one card per doctor, and the
// "next page" link.

use crate::config::consts::{COUNT_MISSING, FIELD_MISSING};
use crate::config::selectors::SelectorTable;
use crate::core::html::{self, Document, Query};
use crate::error::SelectorError;

/// One practitioner listing. Fields hold display text as scraped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub specialty: String,
    pub rating: String,
}

impl Record {
    pub fn new(name: impl Into<String>, specialty: impl Into<String>, rating: impl Into<String>) -> Self {
        Self { name: name.into(), specialty: specialty.into(), rating: rating.into() }
    }

    /// Column order used for CSV/TSV output.
    pub const HEADERS: [&'static str; 3] = ["Name", "Specialty", "Rating"];

    pub fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.specialty.clone(), self.rating.clone()]
    }
}

/// Everything one results page yields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageResult {
    pub total_count_label: String,
    pub records: Vec<Record>,
    pub has_more: bool,
}

/// Compiled selector set for listing pages.
#[derive(Clone, Debug)]
pub struct Extractor {
    total_count: Query,
    card: Query,
    name: Query,
    specialty: Query,
    rating: Query,
    next_button: Query,
}

impl Extractor {
    pub fn new(table: &SelectorTable) -> Result<Self, SelectorError> {
        Ok(Self {
            total_count: Query::compile(table.total_count)?,
            card: Query::compile(table.card)?,
            name: Query::compile(table.name)?,
            specialty: Query::compile(table.specialty)?,
            rating: Query::compile(table.rating)?,
            next_button: Query::compile(table.next_button)?,
        })
    }

    /// Parse once, extract everything.
    pub fn parse_page(&self, markup: &str) -> PageResult {
        let doc = Document::parse(markup);
        let (total_count_label, records) = self.extract(&doc);
        let has_more = self.has_next_page(&doc);
        PageResult { total_count_label, records, has_more }
    }

    /// Total-count label plus one record per listing card, in document order.
    pub fn extract(&self, doc: &Document) -> (String, Vec<Record>) {
        let total = doc
            .find_first(&self.total_count)
            .map(html::text_of)
            .unwrap_or_else(|| s!(COUNT_MISSING));

        let records = doc
            .find_all(&self.card)
            .into_iter()
            .map(|card| {
                let field = |q: &Query| {
                    html::find_first_in(card, q)
                        .map(html::text_of)
                        .unwrap_or_else(|| s!(FIELD_MISSING))
                };
                Record {
                    name: field(&self.name),
                    specialty: field(&self.specialty),
                    rating: field(&self.rating),
                }
            })
            .collect();

        (total, records)
    }

    /// True iff a next-page link appears anywhere in the document.
    pub fn has_next_page(&self, doc: &Document) -> bool {
        doc.contains(&self.next_button)
    }
}
