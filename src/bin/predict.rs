use std::path::Path;

use anyhow::{anyhow, Result};

use productivity_predictor::data::schema::default_inputs;
use productivity_predictor::data::validate::validate;
use productivity_predictor::predictor::{ModelArtifact, DEFAULT_MODEL_PATH};

/// Console front-end: load the trained model, run it once on the example
/// student record (the schema defaults) and print a report block.
fn main() -> Result<()> {
    env_logger::init();

    let model = ModelArtifact::load(Path::new(DEFAULT_MODEL_PATH))?;
    log::info!(
        "Loaded model for '{}' with {} features",
        model.target,
        model.features.len()
    );

    let record = validate(&default_inputs())
        .map_err(|errors| anyhow!("invalid example record:\n{}", errors.join("\n")))?;

    let score = model.predict(&record)?;

    let rule = "=".repeat(50);
    println!("{rule}");
    println!("  Student Productivity Prediction");
    println!("{rule}");
    println!();
    println!("Student data:");
    for (name, value) in record.iter() {
        println!("  {name}: {value}");
    }
    println!();
    println!("Predicted Productivity Score: {score:.2}");
    println!("{rule}");

    Ok(())
}
