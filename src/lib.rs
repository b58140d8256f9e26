/// Thin front-ends for a pre-trained student productivity regression model.
///
/// Exposed as a library so the GUI binary (src/main.rs), the console binary
/// (src/bin/predict.rs) and the tests share the same modules.
pub mod app;
pub mod data;
pub mod predictor;
pub mod state;
pub mod ui;
