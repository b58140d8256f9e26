use eframe::egui;

use crate::state::AppState;
use crate::ui::{form, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PredictorApp {
    pub state: AppState,
}

impl Default for PredictorApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: prediction form ----
        egui::CentralPanel::default().show(ctx, |ui| {
            form::prediction_form(ui, &mut self.state);
        });
    }
}
