// src/cursor.rs
//
// One-at-a-time view over the records of the last run. Owned by a single
// UI session; `reset`, `move_next` and `move_previous` are the only mutators.

use crate::error::EmptyStateError;
use crate::specs::listing::Record;

#[derive(Clone, Debug, Default)]
pub struct Cursor {
    records: Vec<Record>,
    total_count_label: String,
    // Only meaningful while `records` is non-empty; kept < records.len().
    index: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything and go back to the first record.
    pub fn reset(&mut self, total_count_label: impl Into<String>, records: Vec<Record>) {
        self.total_count_label = total_count_label.into();
        self.records = records;
        self.index = 0;
    }

    pub fn current(&self) -> Result<&Record, EmptyStateError> {
        self.records.get(self.index).ok_or(EmptyStateError)
    }

    /// No-op on the last record.
    pub fn move_next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    /// No-op on the first record.
    pub fn move_previous(&mut self) {
        if self.has_previous() {
            self.index -= 1;
        }
    }

    /// 1-based `(position, count)` for display; `None` when empty.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.records.is_empty() {
            None
        } else {
            Some((self.index + 1, self.records.len()))
        }
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.records.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index >= 1 && !self.records.is_empty()
    }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn total_count_label(&self) -> &str { &self.total_count_label }

    pub fn records(&self) -> &[Record] { &self.records }
}
