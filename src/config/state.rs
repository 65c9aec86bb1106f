// src/config/state.rs
use super::options::{AppOptions, Specialization};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Raw text of the location field
    pub location_text: String,
    pub specialization: Specialization,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            location_text: s!(),
            specialization: Specialization::default(),
            window_w: 640,
            window_h: 420,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Mirror GUI inputs → options.scrape
    pub fn sync_gui_into_scrape(&mut self) {
        self.options.scrape.location = self.gui.location_text.trim().to_string();
        self.options.scrape.specialization = self.gui.specialization;
    }
}
