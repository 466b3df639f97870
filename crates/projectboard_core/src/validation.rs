//! Input-boundary field validation.
//!
//! # Responsibility
//! - Provide a pure predicate over one field descriptor.
//! - Keep constraint composition identical for every input form.
//!
//! # Invariants
//! - All provided constraints compose with logical AND.
//! - Length and numeric bounds are inclusive.
//! - The predicate never mutates or logs; callers decide how failures are
//!   surfaced.

/// One field value under validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free-text input.
    Text(String),
    /// Numeric input.
    Number(i64),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

/// Declarative constraints for one input field.
///
/// Constraints that do not apply to the value's kind are skipped: length
/// bounds only inspect text, numeric bounds only inspect numbers.
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    /// Value under validation.
    pub value: FieldValue,
    /// Text must be non-empty after trimming. Numbers always satisfy this.
    pub required: bool,
    /// Inclusive lower bound on text length, counted in characters.
    pub min_length: Option<usize>,
    /// Inclusive upper bound on text length, counted in characters.
    pub max_length: Option<usize>,
    /// Inclusive lower bound for numeric values.
    pub min: Option<i64>,
    /// Inclusive upper bound for numeric values.
    pub max: Option<i64>,
}

impl FieldSpec {
    /// Starts an unconstrained spec for one text field.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: FieldValue::Text(value.into()),
            ..Self::default()
        }
    }

    /// Starts an unconstrained spec for one numeric field.
    pub fn number(value: i64) -> Self {
        Self {
            value: FieldValue::Number(value),
            ..Self::default()
        }
    }
}

/// Checks one field descriptor against all of its provided constraints.
pub fn validate(spec: &FieldSpec) -> bool {
    let mut is_valid = true;

    if spec.required {
        is_valid &= match &spec.value {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Number(_) => true,
        };
    }
    if let (Some(min_length), FieldValue::Text(text)) = (spec.min_length, &spec.value) {
        is_valid &= text.chars().count() >= min_length;
    }
    if let (Some(max_length), FieldValue::Text(text)) = (spec.max_length, &spec.value) {
        is_valid &= text.chars().count() <= max_length;
    }
    if let (Some(min), FieldValue::Number(number)) = (spec.min, &spec.value) {
        is_valid &= *number >= min;
    }
    if let (Some(max), FieldValue::Number(number)) = (spec.max, &spec.value) {
        is_valid &= *number <= max;
    }

    is_valid
}
