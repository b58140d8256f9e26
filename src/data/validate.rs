use super::record::{FieldValue, PredictionRecord};
use super::schema::{FieldKind, FIELDS};

// ---------------------------------------------------------------------------
// Field validation: raw entry text → typed record, or a list of errors
// ---------------------------------------------------------------------------

/// Validate one entry buffer per schema field (in schema order).
///
/// Returns the complete typed record, or every problem found — one message
/// per offending field, in schema order, each naming the field's label.
/// Validation never panics; all fields are checked before reporting.
pub fn validate(inputs: &[String]) -> Result<PredictionRecord, Vec<String>> {
    let mut values = Vec::with_capacity(FIELDS.len());
    let mut errors = Vec::new();

    for (spec, raw) in FIELDS.iter().zip(inputs) {
        let raw = raw.trim();

        match &spec.kind {
            FieldKind::Choice { options } => {
                if options.contains(&raw) {
                    values.push((spec.name, FieldValue::Text(raw.to_string())));
                } else {
                    errors.push(format!("{}: select a valid option", spec.label));
                }
            }
            FieldKind::Int { min, max } => {
                if raw.is_empty() {
                    errors.push(format!("{}: field is empty", spec.label));
                    continue;
                }
                match raw.parse::<i64>() {
                    Ok(v) if (*min..=*max).contains(&v) => {
                        values.push((spec.name, FieldValue::Int(v)));
                    }
                    Ok(_) => errors.push(format!(
                        "{}: must be between {min} and {max}",
                        spec.label
                    )),
                    Err(_) => {
                        errors.push(format!("{}: enter a whole number", spec.label))
                    }
                }
            }
            FieldKind::Float { min, max } => {
                if raw.is_empty() {
                    errors.push(format!("{}: field is empty", spec.label));
                    continue;
                }
                match raw.parse::<f64>() {
                    Ok(v) if (*min..=*max).contains(&v) => {
                        values.push((spec.name, FieldValue::Float(v)));
                    }
                    Ok(_) => errors.push(format!(
                        "{}: must be between {min} and {max}",
                        spec.label
                    )),
                    Err(_) => errors.push(format!("{}: enter a number", spec.label)),
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(PredictionRecord::new(values))
    } else {
        Err(errors)
    }
}
