//! Metadata types for describing entity schemas
//!
//! This module provides compile-time metadata for all entity kinds.
//! Declarations live in `src/domain/*/metadata.json`; `build.rs` turns each
//! into `ENTITY_METADATA`, `FIELDS` and `SCHEMA` statics.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::EntityKind;
//!
//! let schema = EntityKind::Course.schema();
//! println!("Entity: {}", schema.entity().ui.element_name);
//!
//! for field in schema.fields() {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
mod schema;
mod types;
mod validation;

pub use field_type::FieldType;
pub use schema::{EntitySchema, SchemaError};
pub use types::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
