// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use practo_scrape::{config::state::GuiState, gui, log};

/// 32×32 green cross on a white rounded tile.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let img = image::RgbaImage::from_fn(N, N, |x, y| {
        let edge = x.min(y).min(N - 1 - x).min(N - 1 - y);
        let in_bar = |a: u32, b: u32| (12..20).contains(&a) && (5..27).contains(&b);
        if edge == 0 && (x == y || x + y == N - 1) {
            image::Rgba([0, 0, 0, 0]) // clipped corners
        } else if in_bar(x, y) || in_bar(y, x) {
            image::Rgba([0, 150, 80, 255])
        } else {
            image::Rgba([250, 250, 250, 255])
        }
    });
    let (width, height) = img.dimensions();
    IconData { rgba: img.into_raw(), width, height }
}

fn main() {
    log::init(log::LogTarget::File);

    let defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([defaults.window_w as f32, defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
