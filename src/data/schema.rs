// ---------------------------------------------------------------------------
// Static field schema: name, label, type + bounds, default
// ---------------------------------------------------------------------------

/// The type and domain of one input field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Whole number in `min..=max`.
    Int { min: i64, max: i64 },
    /// Real number in `min..=max`.
    Float { min: f64, max: f64 },
    /// One of a fixed set of options.
    Choice { options: &'static [&'static str] },
}

impl FieldKind {
    /// Short range hint shown next to numeric inputs, e.g. `(0.5 - 10)`.
    pub fn range_hint(&self) -> Option<String> {
        match self {
            FieldKind::Int { min, max } => Some(format!("({min} - {max})")),
            FieldKind::Float { min, max } => Some(format!("({min} - {max})")),
            FieldKind::Choice { .. } => None,
        }
    }
}

/// One row of the input schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Column name expected by the model artifact.
    pub name: &'static str,
    /// Human-readable label used in the form and in error messages.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Default value as entry text; doubles as the console script's record.
    pub default: &'static str,
}

pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];

/// The full input schema. Rendering and validation both consume this table;
/// neither hardcodes any field.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "age",
        label: "Age",
        kind: FieldKind::Int { min: 17, max: 29 },
        default: "21",
    },
    FieldSpec {
        name: "gender",
        label: "Gender",
        kind: FieldKind::Choice { options: GENDER_OPTIONS },
        default: "Male",
    },
    FieldSpec {
        name: "study_hours_per_day",
        label: "Study hours per day",
        kind: FieldKind::Float { min: 0.5, max: 10.0 },
        default: "5.0",
    },
    FieldSpec {
        name: "sleep_hours",
        label: "Sleep hours",
        kind: FieldKind::Float { min: 3.0, max: 10.0 },
        default: "7.0",
    },
    FieldSpec {
        name: "phone_usage_hours",
        label: "Phone usage hours",
        kind: FieldKind::Float { min: 0.5, max: 12.0 },
        default: "3.0",
    },
    FieldSpec {
        name: "social_media_hours",
        label: "Social media hours",
        kind: FieldKind::Float { min: 0.0, max: 8.0 },
        default: "1.5",
    },
    FieldSpec {
        name: "youtube_hours",
        label: "YouTube hours",
        kind: FieldKind::Float { min: 0.0, max: 6.0 },
        default: "1.0",
    },
    FieldSpec {
        name: "gaming_hours",
        label: "Gaming hours",
        kind: FieldKind::Float { min: 0.0, max: 6.0 },
        default: "2.0",
    },
    FieldSpec {
        name: "breaks_per_day",
        label: "Breaks per day",
        kind: FieldKind::Int { min: 1, max: 14 },
        default: "4",
    },
    FieldSpec {
        name: "coffee_intake_mg",
        label: "Caffeine intake (mg)",
        kind: FieldKind::Int { min: 0, max: 500 },
        default: "200",
    },
    FieldSpec {
        name: "exercise_minutes",
        label: "Exercise minutes",
        kind: FieldKind::Int { min: 0, max: 120 },
        default: "30",
    },
    FieldSpec {
        name: "assignments_completed",
        label: "Assignments completed",
        kind: FieldKind::Int { min: 0, max: 19 },
        default: "8",
    },
    FieldSpec {
        name: "attendance_percentage",
        label: "Attendance (%)",
        kind: FieldKind::Float { min: 40.0, max: 100.0 },
        default: "85.0",
    },
    FieldSpec {
        name: "stress_level",
        label: "Stress level (1-10)",
        kind: FieldKind::Int { min: 1, max: 10 },
        default: "5",
    },
    FieldSpec {
        name: "focus_score",
        label: "Focus score (30-99)",
        kind: FieldKind::Int { min: 30, max: 99 },
        default: "65",
    },
    FieldSpec {
        name: "final_grade",
        label: "Final grade",
        kind: FieldKind::Float { min: 40.0, max: 100.0 },
        default: "78.0",
    },
];

/// Entry buffers for a fresh form: one string per field, in schema order.
pub fn default_inputs() -> Vec<String> {
    FIELDS.iter().map(|f| f.default.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_sixteen_fields() {
        assert_eq!(FIELDS.len(), 16);
        assert_eq!(default_inputs().len(), 16);
    }

    #[test]
    fn field_names_are_unique() {
        let mut names: Vec<&str> = FIELDS.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FIELDS.len());
    }

    #[test]
    fn range_hint_formats_bounds() {
        assert_eq!(
            FieldKind::Int { min: 17, max: 29 }.range_hint().as_deref(),
            Some("(17 - 29)")
        );
        assert_eq!(
            FieldKind::Float { min: 0.5, max: 10.0 }.range_hint().as_deref(),
            Some("(0.5 - 10)")
        );
        assert!(FieldKind::Choice { options: GENDER_OPTIONS }
            .range_hint()
            .is_none());
    }
}
