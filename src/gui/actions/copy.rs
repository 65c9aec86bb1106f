// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    csv::{self, Delim},
    gui::app::App,
};

/// Copy every loaded record as TSV (with headers) to the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.cursor.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }
    let txt = csv::records_to_string(app.cursor.records(), true, Delim::Tsv);
    logf!("Copy: records={}", app.cursor.len());
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
