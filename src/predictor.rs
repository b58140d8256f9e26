use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::data::record::{FieldValue, PredictionRecord};

/// Relative path both front-ends load the artifact from at startup.
pub const DEFAULT_MODEL_PATH: &str = "model.json";

// ---------------------------------------------------------------------------
// Model artifact – externally trained, deserialized as-is
// ---------------------------------------------------------------------------

/// One feature of the fitted pipeline. Numeric features carry the
/// standardization parameters baked in at training time; categorical
/// features carry one coefficient per known category (one-hot).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Feature {
    Numeric {
        name: String,
        mean: f64,
        std: f64,
        coefficient: f64,
    },
    Categorical {
        name: String,
        categories: Vec<String>,
        coefficients: Vec<f64>,
    },
}

impl Feature {
    pub fn name(&self) -> &str {
        match self {
            Feature::Numeric { name, .. } | Feature::Categorical { name, .. } => name,
        }
    }
}

/// A fitted regression pipeline (preprocessing + linear model) produced by an
/// external training process. Opaque to the front-ends beyond this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    /// Name of the predicted quantity, e.g. `productivity_score`.
    pub target: String,
    pub intercept: f64,
    pub features: Vec<Feature>,
}

// ---------------------------------------------------------------------------
// Prediction errors – schema mismatches between artifact and record
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("model expects field '{0}' which is not in the record")]
    MissingField(String),

    #[error("field '{field}': expected a {expected} value")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("field '{field}': '{value}' is not a category known to the model")]
    UnknownCategory { field: String, value: String },
}

impl ModelArtifact {
    /// Load the artifact from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading model artifact {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Parse the artifact from JSON text and reject structural problems.
    pub fn from_json(text: &str) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(text).context("parsing model artifact")?;
        artifact.check()?;
        Ok(artifact)
    }

    /// Structural checks done once at load time, not on every predict.
    fn check(&self) -> Result<()> {
        if self.features.is_empty() {
            bail!("model artifact has no features");
        }
        for feature in &self.features {
            match feature {
                Feature::Numeric { name, std, .. } => {
                    if *std == 0.0 || !std.is_finite() {
                        bail!("feature '{name}': invalid standard deviation {std}");
                    }
                }
                Feature::Categorical {
                    name,
                    categories,
                    coefficients,
                } => {
                    if categories.len() != coefficients.len() {
                        bail!(
                            "feature '{name}': {} categories but {} coefficients",
                            categories.len(),
                            coefficients.len()
                        );
                    }
                    if categories.is_empty() {
                        bail!("feature '{name}': no categories");
                    }
                }
            }
        }
        Ok(())
    }

    /// Run the pipeline on one complete record: standardize each numeric
    /// field, look up the one-hot coefficient for each categorical field,
    /// and sum with the intercept.
    pub fn predict(&self, record: &PredictionRecord) -> Result<f64, PredictError> {
        let mut score = self.intercept;

        for feature in &self.features {
            let value = record
                .get(feature.name())
                .ok_or_else(|| PredictError::MissingField(feature.name().to_string()))?;

            match feature {
                Feature::Numeric {
                    name,
                    mean,
                    std,
                    coefficient,
                } => {
                    let x = value.as_f64().ok_or_else(|| PredictError::TypeMismatch {
                        field: name.clone(),
                        expected: "numeric",
                    })?;
                    score += (x - mean) / std * coefficient;
                }
                Feature::Categorical {
                    name,
                    categories,
                    coefficients,
                } => {
                    let FieldValue::Text(text) = value else {
                        return Err(PredictError::TypeMismatch {
                            field: name.clone(),
                            expected: "categorical",
                        });
                    };
                    let index = categories.iter().position(|c| c == text).ok_or_else(
                        || PredictError::UnknownCategory {
                            field: name.clone(),
                            value: text.clone(),
                        },
                    )?;
                    score += coefficients[index];
                }
            }
        }

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::default_inputs;
    use crate::data::validate::validate;

    const BUNDLED_MODEL: &str = include_str!("../model.json");

    fn default_record() -> PredictionRecord {
        validate(&default_inputs()).expect("defaults must validate")
    }

    fn tiny_artifact() -> ModelArtifact {
        ModelArtifact::from_json(
            r#"{
                "target": "productivity_score",
                "intercept": 10.0,
                "features": [
                    { "kind": "numeric", "name": "age",
                      "mean": 23.0, "std": 4.0, "coefficient": 2.0 },
                    { "kind": "categorical", "name": "gender",
                      "categories": ["Female", "Male", "Other"],
                      "coefficients": [0.5, -0.5, 0.0] }
                ]
            }"#,
        )
        .expect("artifact must parse")
    }

    #[test]
    fn predicts_a_standardized_linear_score() {
        // age 21 → z = (21 - 23) / 4 = -0.5 → -1.0; gender Male → -0.5
        let score = tiny_artifact().predict(&default_record()).unwrap();
        assert!((score - 8.5).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn bundled_model_reproduces_reference_score() {
        let model = ModelArtifact::from_json(BUNDLED_MODEL).expect("bundled model");
        assert_eq!(model.target, "productivity_score");
        assert_eq!(model.features.len(), 16);

        let score = model.predict(&default_record()).unwrap();
        assert!((score - 57.54).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn unknown_category_is_a_schema_mismatch() {
        let record = PredictionRecord::new(vec![
            ("age", FieldValue::Int(21)),
            ("gender", FieldValue::Text("Nonbinary".into())),
        ]);
        let err = tiny_artifact().predict(&record).unwrap_err();
        assert!(matches!(err, PredictError::UnknownCategory { .. }));
    }

    #[test]
    fn missing_field_is_a_schema_mismatch() {
        let record = PredictionRecord::new(vec![("age", FieldValue::Int(21))]);
        let err = tiny_artifact().predict(&record).unwrap_err();
        assert!(matches!(err, PredictError::MissingField(f) if f == "gender"));
    }

    #[test]
    fn text_in_a_numeric_feature_is_a_type_mismatch() {
        let record = PredictionRecord::new(vec![
            ("age", FieldValue::Text("old".into())),
            ("gender", FieldValue::Text("Male".into())),
        ]);
        let err = tiny_artifact().predict(&record).unwrap_err();
        assert!(matches!(err, PredictError::TypeMismatch { .. }));
    }

    #[test]
    fn load_rejects_mismatched_coefficient_count() {
        let result = ModelArtifact::from_json(
            r#"{
                "target": "t", "intercept": 0.0,
                "features": [
                    { "kind": "categorical", "name": "gender",
                      "categories": ["Female", "Male"],
                      "coefficients": [0.5] }
                ]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_rejects_zero_standard_deviation() {
        let result = ModelArtifact::from_json(
            r#"{
                "target": "t", "intercept": 0.0,
                "features": [
                    { "kind": "numeric", "name": "age",
                      "mean": 23.0, "std": 0.0, "coefficient": 1.0 }
                ]
            }"#,
        );
        assert!(result.is_err());
    }
}
