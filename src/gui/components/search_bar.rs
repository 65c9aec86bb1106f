// src/gui/components/search_bar.rs
//
// Location field, specialization picker, Scrape/Cancel/Copy. Writes inputs into
// `app.state.gui`; the scrape itself is started through `App`.

use eframe::egui::{self, widgets::Spinner};

use crate::{
    config::options::Specialization,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.label("Location:");
        let resp = ui.add_enabled(
            !app.running,
            egui::TextEdit::singleline(&mut app.state.gui.location_text)
                .hint_text("e.g. Bangalore")
                .desired_width(180.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        let before = app.state.gui.specialization;
        ui.add_enabled_ui(!app.running, |ui| {
            egui::ComboBox::from_label("Specialization")
                .selected_text(app.state.gui.specialization.slug())
                .show_ui(ui, |ui| {
                    for sp in Specialization::ALL {
                        ui.selectable_value(&mut app.state.gui.specialization, sp, sp.slug());
                    }
                });
        });
        if app.state.gui.specialization != before {
            logf!("UI: Specialization → {}", app.state.gui.specialization);
        }
    });

    ui.horizontal(|ui| {
        let can_scrape = !app.running && !app.state.gui.location_text.trim().is_empty();
        if ui.add_enabled(can_scrape, egui::Button::new("Scrape")).clicked() {
            submit = true;
        }

        if app.running {
            ui.add(Spinner::new());
            if ui.button("Cancel").clicked() {
                app.cancel_scrape();
            }
        }

        let can_copy = !app.running && !app.cursor.is_empty();
        if ui.add_enabled(can_copy, egui::Button::new("Copy")).clicked() {
            actions::copy(app, &ctx);
        }
    });

    if submit && !app.running {
        app.start_scrape(&ctx);
    }
}
