//! Field type enumeration for metadata system

use serde::Serialize;

/// Kind of value a field holds.
///
/// Only drives the input widget and display; stored values are not coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    String,
    Number,
    Enum,
    Date,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Enum => "enum",
            Self::Date => "date",
            Self::Boolean => "boolean",
        }
    }

    /// Fields with a closed set of values can back a discrete list filter.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Enum | Self::Boolean)
    }

    /// HTML input type used by the form view
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::String | Self::Enum => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "checkbox",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
