use std::fmt;

// ---------------------------------------------------------------------------
// FieldValue – one validated cell of the prediction record
// ---------------------------------------------------------------------------

/// A typed field value after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Interpret the value as `f64` for the model's numeric features.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            // Keep a trailing .0 on whole floats so the echo shows the type.
            FieldValue::Float(v) if v.fract() == 0.0 && v.is_finite() => {
                write!(f, "{v:.1}")
            }
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// PredictionRecord – the complete validated input row
// ---------------------------------------------------------------------------

/// One complete, validated input row in schema order. Immutable once built;
/// constructed fresh per prediction and discarded after the result is shown.
#[derive(Debug, Clone)]
pub struct PredictionRecord {
    values: Vec<(&'static str, FieldValue)>,
}

impl PredictionRecord {
    pub fn new(values: Vec<(&'static str, FieldValue)>) -> Self {
        PredictionRecord { values }
    }

    /// Look up a field by column name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Iterate fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.values.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_float_type_visible() {
        assert_eq!(FieldValue::Float(5.0).to_string(), "5.0");
        assert_eq!(FieldValue::Float(7.25).to_string(), "7.25");
        assert_eq!(FieldValue::Int(200).to_string(), "200");
        assert_eq!(FieldValue::Text("Male".into()).to_string(), "Male");
    }

    #[test]
    fn lookup_by_name() {
        let record = PredictionRecord::new(vec![
            ("age", FieldValue::Int(21)),
            ("gender", FieldValue::Text("Female".into())),
        ]);
        assert_eq!(record.get("age"), Some(&FieldValue::Int(21)));
        assert_eq!(record.get("final_grade"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn as_f64_only_for_numbers() {
        assert_eq!(FieldValue::Int(4).as_f64(), Some(4.0));
        assert_eq!(FieldValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(FieldValue::Text("Other".into()).as_f64(), None);
    }
}
