// src/gui/components/profile_card.rs
//
// The one-at-a-time doctor view. Purely a projection of `app.cursor`;
// the only writes are move_next / move_previous.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::{App, Outcome};

const NO_RESULTS: &str =
    "No doctor details found. Please check the location and specialization and try again.";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match &app.outcome {
        Outcome::Idle => {}
        Outcome::Loaded { total_count_label } => {
            ui.label(
                RichText::new(format!("Total number of doctors available: {total_count_label}"))
                    .color(Color32::from_rgb(0, 140, 70)),
            );
        }
        Outcome::Failed { message, partial } => {
            ui.colored_label(Color32::RED, format!("Scrape failed: {message}"));
            if *partial > 0 {
                ui.label(format!("Showing {partial} doctor(s) gathered before the failure."));
            }
        }
    }

    ui.separator();

    let Ok(doctor) = app.cursor.current() else {
        // Nothing to navigate; only complain after a clean run came back empty.
        if matches!(app.outcome, Outcome::Loaded { .. }) {
            ui.colored_label(Color32::RED, NO_RESULTS);
        }
        return;
    };

    field(ui, "Name", &doctor.name);
    field(ui, "Specialty", &doctor.specialty);
    field(ui, "Rating", &doctor.rating);
    ui.separator();

    let (pos, count) = app.cursor.position().unwrap_or((0, 0));
    let has_prev = app.cursor.has_previous();
    let has_next = app.cursor.has_next();
    let mut go_prev = false;
    let mut go_next = false;

    ui.columns(3, |cols| {
        if has_prev && cols[0].button("Previous").clicked() {
            go_prev = true;
        }
        cols[1].vertical_centered(|ui| {
            ui.label(format!("Profile {pos} of {count}"));
        });
        cols[2].with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if has_next && ui.button("Next").clicked() {
                go_next = true;
            }
        });
    });

    if go_prev {
        app.cursor.move_previous();
    }
    if go_next {
        app.cursor.move_next();
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{label}:")).strong());
        ui.label(value);
    });
}
