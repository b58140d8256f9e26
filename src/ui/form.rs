use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::schema::{FieldKind, FIELDS};
use crate::state::AppState;

// Result label colour (matches the original desktop form).
const RESULT_GREEN: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);

// ---------------------------------------------------------------------------
// Prediction form (central panel)
// ---------------------------------------------------------------------------

/// Render the 16-field form with predict/clear actions and the result label.
pub fn prediction_form(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Student Productivity Prediction");
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("prediction_fields")
                .num_columns(3)
                .spacing([12.0, 4.0])
                .show(ui, |ui: &mut Ui| {
                    for (i, spec) in FIELDS.iter().enumerate() {
                        ui.label(spec.label);
                        field_widget(ui, &spec.kind, spec.name, &mut state.inputs[i]);
                        if let Some(hint) = spec.kind.range_hint() {
                            ui.label(RichText::new(hint).color(Color32::GRAY));
                        } else {
                            ui.label("");
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);

            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Predict").clicked() {
                    state.run_prediction();
                }
                if ui.button("Clear").clicked() {
                    state.reset();
                }
            });

            // All validation problems at once, one line per offending field.
            if !state.errors.is_empty() {
                ui.add_space(8.0);
                for error in &state.errors {
                    ui.label(RichText::new(error).color(Color32::RED));
                }
            }

            if let Some(score) = state.result {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Productivity Score: {score:.2}"))
                        .size(18.0)
                        .strong()
                        .color(RESULT_GREEN),
                );
            }
        });
}

/// One input widget: a combo box for choice fields, a text entry otherwise.
fn field_widget(ui: &mut Ui, kind: &FieldKind, name: &'static str, buffer: &mut String) {
    match kind {
        FieldKind::Choice { options } => {
            egui::ComboBox::from_id_salt(name)
                .selected_text(buffer.clone())
                .width(120.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for option in *options {
                        if ui
                            .selectable_label(buffer.as_str() == *option, *option)
                            .clicked()
                        {
                            *buffer = option.to_string();
                        }
                    }
                });
        }
        FieldKind::Int { .. } | FieldKind::Float { .. } => {
            ui.add(egui::TextEdit::singleline(buffer).desired_width(120.0));
        }
    }
}
