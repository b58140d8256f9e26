use crate::data::schema::default_inputs;
use crate::data::validate::validate;
use crate::predictor::ModelArtifact;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full form state, independent of rendering.
pub struct AppState {
    /// Loaded model (None until an artifact loads successfully).
    pub model: Option<ModelArtifact>,

    /// Raw entry text, one buffer per schema field, in schema order.
    pub inputs: Vec<String>,

    /// Last predicted score, cleared on reset and on failed validation.
    pub result: Option<f64>,

    /// Validation errors from the last predict attempt, in schema order.
    pub errors: Vec<String>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            model: None,
            inputs: default_inputs(),
            result: None,
            errors: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded model artifact.
    pub fn set_model(&mut self, model: ModelArtifact) {
        self.model = Some(model);
        self.result = None;
        self.status_message = None;
    }

    /// Validate the current entries and, if they form a complete record,
    /// run the model on it.
    pub fn run_prediction(&mut self) {
        self.result = None;

        let record = match validate(&self.inputs) {
            Ok(record) => {
                self.errors.clear();
                record
            }
            Err(errors) => {
                self.errors = errors;
                return;
            }
        };

        let Some(model) = &self.model else {
            self.status_message = Some("No model loaded (File → Open model…)".to_string());
            return;
        };

        match model.predict(&record) {
            Ok(score) => {
                log::info!("Predicted {} = {score:.2}", model.target);
                self.result = Some(score);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Prediction failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Restore every field to its schema default and clear the result.
    pub fn reset(&mut self) {
        self.inputs = default_inputs();
        self.result = None;
        self.errors.clear();
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::FIELDS;

    fn state_with_model() -> AppState {
        let mut state = AppState::default();
        state.set_model(
            ModelArtifact::from_json(include_str!("../model.json")).expect("bundled model"),
        );
        state
    }

    #[test]
    fn reset_restores_defaults_and_clears_result() {
        let mut state = state_with_model();
        state.inputs[0] = "99".to_string();
        state.result = Some(42.0);
        state.errors.push("Age: must be between 17 and 29".to_string());
        state.status_message = Some("Error: something".to_string());

        state.reset();

        assert_eq!(state.inputs, default_inputs());
        assert_eq!(state.result, None);
        assert!(state.errors.is_empty());
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn prediction_with_defaults_sets_the_result() {
        let mut state = state_with_model();
        state.run_prediction();
        assert!(state.errors.is_empty());
        let score = state.result.expect("defaults must predict");
        assert!((score - 57.54).abs() < 1e-9);
    }

    #[test]
    fn invalid_entries_surface_errors_and_clear_the_result() {
        let mut state = state_with_model();
        state.result = Some(1.0);
        let age = FIELDS.iter().position(|f| f.name == "age").unwrap();
        state.inputs[age] = "abc".to_string();

        state.run_prediction();

        assert_eq!(state.result, None);
        assert_eq!(state.errors, vec!["Age: enter a whole number".to_string()]);
    }

    #[test]
    fn predicting_without_a_model_reports_status() {
        let mut state = AppState::default();
        state.run_prediction();
        assert_eq!(state.result, None);
        assert!(state.status_message.is_some());
    }
}
