// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    cursor::Cursor,
    error::ScrapeFailure,
    scrape::{self, CancelToken, Listing},
};

use super::{components, progress::GuiProgress};

pub const TITLE: &str = "Practo Doctor Profile Viewer";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

type JobResult = Result<Listing, ScrapeFailure>;

/// What the last finished run left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing scraped yet this session.
    Idle,
    Loaded { total_count_label: String },
    Failed { message: String, partial: usize },
}

pub struct App {
    // single source of truth for inputs/options (UI thread only)
    pub state: AppState,

    // session-scoped records + position
    pub cursor: Cursor,
    pub outcome: Outcome,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    cancel: CancelToken,
    job: Option<mpsc::Receiver<JobResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: specialization={}", state.gui.specialization);
        Self {
            state,
            cursor: Cursor::new(),
            outcome: Outcome::Idle,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            cancel: CancelToken::new(),
            job: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Kick off a run on a worker thread. Ignored while one is in flight.
    pub fn start_scrape(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        self.state.sync_gui_into_scrape();
        if self.state.options.scrape.location.is_empty() {
            self.status("Enter a location first");
            return;
        }

        let opts = self.state.options.clone();

        self.cancel = CancelToken::new();
        let cancel = self.cancel.clone();
        let status = self.status.clone();
        let ctx2 = ctx.clone();
        let (tx, rx) = mpsc::channel::<JobResult>();

        self.running = true;
        self.job = Some(rx);
        self.status("Scraping…");

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status, ctx2.clone());
            // → This is where the scrape happens ←
            let res = scrape::run_scrape_with(&opts, Some(&mut prog), Some(&cancel));
            let _ = tx.send(res);
            ctx2.request_repaint();
        });
    }

    pub fn cancel_scrape(&mut self) {
        if self.running {
            logw!("Scrape: Cancel requested");
            self.cancel.cancel();
            self.status("Cancelling…");
        }
    }

    /// Pick up a finished run, if any.
    pub fn poll_job(&mut self) {
        let Some(rx) = &self.job else { return };
        match rx.try_recv() {
            Ok(res) => {
                self.job = None;
                self.finish_scrape(res);
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.job = None;
                self.running = false;
                loge!("Scrape: worker ended without a result");
                self.status("Error: scrape worker stopped unexpectedly");
            }
        }
    }

    /// Load a run's result into the session.
    pub fn finish_scrape(&mut self, res: JobResult) {
        self.running = false;
        match res {
            Ok(listing) => {
                logf!(
                    "Scrape: OK records={} total={:?}",
                    listing.records.len(),
                    listing.total_count_label
                );
                self.outcome = Outcome::Loaded { total_count_label: listing.total_count_label.clone() };
                self.status(format!("Ready: {} doctor(s) loaded", listing.records.len()));
                self.cursor.reset(listing.total_count_label, listing.records);
            }
            Err(failure) => {
                let partial = failure.partial.records.len();
                loge!("Scrape: Error: {}", failure);
                self.outcome = Outcome::Failed { message: failure.error.to_string(), partial };
                self.status(format!("Error: {}", failure.error));
                self.cursor.reset(failure.partial.total_count_label, failure.partial.records);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            ui.heading(TITLE);
            components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::profile_card::draw(ui, self);
        });
    }
}
