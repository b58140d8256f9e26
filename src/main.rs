use std::path::Path;

use eframe::egui;

use productivity_predictor::app::PredictorApp;
use productivity_predictor::predictor::{ModelArtifact, DEFAULT_MODEL_PATH};

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 720.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Student Productivity Predictor",
        options,
        Box::new(|_cc| {
            let mut app = PredictorApp::default();

            // Load the artifact from its fixed path; a failure is shown in
            // the top bar and the user can still open a model manually.
            match ModelArtifact::load(Path::new(DEFAULT_MODEL_PATH)) {
                Ok(model) => {
                    log::info!(
                        "Loaded model for '{}' with {} features",
                        model.target,
                        model.features.len()
                    );
                    app.state.set_model(model);
                }
                Err(e) => {
                    log::error!("Failed to load {DEFAULT_MODEL_PATH}: {e:#}");
                    app.state.status_message = Some(format!("Error: {e:#}"));
                }
            }

            Ok(Box::new(app))
        }),
    )
}
