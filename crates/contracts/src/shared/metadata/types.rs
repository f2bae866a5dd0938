//! Core metadata types for entity schemas
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldType;
use super::validation::ValidationRules;
use serde::Serialize;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for an entity kind
/// All string fields are 'static for zero-cost compile-time access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityMetadataInfo {
    pub schema_version: &'static str,
    /// Singular machine name, e.g. "course"
    pub entity_name: &'static str,
    /// Index in the system, e.g. "a001"
    pub entity_index: &'static str,
    /// Plural route slug, e.g. "courses"
    pub collection_name: &'static str,
    /// Prefix for generated ids, e.g. "COURSE" -> "COURSE104"
    pub id_prefix: &'static str,
    /// Field the list view's free-text search runs over
    pub search_field: &'static str,
    pub ui: EntityUiMetadata,
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: Option<&'static str>,
    /// Sidebar group id
    pub group: &'static str,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    pub searchable: bool,
    pub filterable: bool,
    pub enum_values: Option<&'static [&'static str]>,
}

impl FieldMetadata {
    /// Check if field should be visible in list view
    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    /// Check if field should be visible in form
    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }

    /// Declared choices for enum fields, empty for everything else
    pub fn choices(&self) -> &'static [&'static str] {
        self.enum_values.unwrap_or(&[])
    }

    /// Whether `value` is acceptable for this field's closed set.
    /// Non-enum fields accept anything.
    pub fn accepts_choice(&self, value: &str) -> bool {
        match self.field_type {
            FieldType::Enum => self.choices().contains(&value),
            _ => true,
        }
    }

    pub fn renders_as_badge(&self) -> bool {
        self.ui.widget == Some("badge")
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
    pub widget: Option<&'static str>,
    pub column_width: Option<u32>,
}

/// Default values for FieldUiMetadata
impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self {
            label: "",
            placeholder: None,
            hint: None,
            visible_in_list: true,
            visible_in_form: true,
            widget: None,
            column_width: None,
        }
    }
}
