/// Data layer: the static field schema, validation, and the typed record.
///
/// Architecture:
/// ```text
///   raw entry text (one String per field)
///        │
///        ▼
///   ┌──────────┐
///   │ validate  │  check against the schema, collect errors
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ PredictionRecord  │  typed, schema-ordered, immutable
///   └──────────────────┘
/// ```
pub mod record;
pub mod schema;
pub mod validate;
