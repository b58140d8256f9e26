use eframe::egui::{self, Color32, RichText, Ui};

use crate::predictor::ModelArtifact;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open model…").clicked() {
                open_model_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        match &state.model {
            Some(model) => {
                ui.label(format!(
                    "model: {} ({} features)",
                    model.target,
                    model.features.len()
                ));
            }
            None => {
                ui.label("no model loaded");
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_model_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open model artifact")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match ModelArtifact::load(&path) {
            Ok(model) => {
                log::info!(
                    "Loaded model for '{}' with {} features",
                    model.target,
                    model.features.len()
                );
                state.set_model(model);
            }
            Err(e) => {
                log::error!("Failed to load model: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
