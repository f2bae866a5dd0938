//! Validation rules for metadata fields

use serde::Serialize;

/// Validation rules for a field
///
/// Only `required` blocks submission. `min`/`max`/`max_length` are passed to
/// the input widget as attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Validate a raw input value against the rules
    pub fn validate_input(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }
        Ok(())
    }
}
