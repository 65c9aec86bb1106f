// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Progress sink for the worker thread: writes the shared status line and
/// wakes the UI so it repaints.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    pages: u32,
    records: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, pages: 0, records: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = text;
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, max_pages: u32) {
        self.set_status(format!("Scraping (up to {max_pages} pages)…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn page_done(&mut self, page: u32, on_page: usize, so_far: usize) {
        self.pages = page;
        self.records = so_far;
        self.set_status(format!("Fetched page {page}: {on_page} doctor(s), {so_far} so far"));
    }
    fn finish(&mut self) {
        if self.pages == 0 {
            self.set_status(s!("Fetch complete")); // no counts if nothing came back
        } else {
            self.set_status(format!("Fetch complete ({} page(s), {} doctor(s))", self.pages, self.records));
        }
    }
}
