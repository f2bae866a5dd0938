//! Entity schema: entity metadata plus its ordered field list

use super::field_type::FieldType;
use super::types::{EntityMetadataInfo, FieldMetadata};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Schema definition errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{entity}: field '{field}' is declared more than once")]
    DuplicateField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: enum field '{field}' declares no values")]
    EmptyEnum {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: field '{field}' declares enum values but is not an enum")]
    UnexpectedEnumValues {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: search field '{field}' does not exist")]
    UnknownSearchField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: search field '{field}' is not marked searchable")]
    SearchFieldNotSearchable {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: filterable field '{field}' is not an enum or boolean")]
    FilterNotDiscrete {
        entity: &'static str,
        field: &'static str,
    },
}

/// Declarative description of one entity kind's record shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntitySchema {
    entity: &'static EntityMetadataInfo,
    fields: &'static [FieldMetadata],
}

impl EntitySchema {
    pub const fn new(entity: &'static EntityMetadataInfo, fields: &'static [FieldMetadata]) -> Self {
        Self { entity, fields }
    }

    pub fn entity(&self) -> &'static EntityMetadataInfo {
        self.entity
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &'static [FieldMetadata] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn searchable_fields(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.searchable)
    }

    pub fn filterable_fields(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.filterable)
    }

    /// The field free-text search runs over
    pub fn search_field(&self) -> Option<&'static FieldMetadata> {
        self.field(self.entity.search_field)
    }

    pub fn list_fields(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.visible_in_list())
    }

    pub fn form_fields(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.visible_in_form())
    }

    /// Verify schema invariants
    pub fn check(&self) -> Result<(), SchemaError> {
        let entity = self.entity.entity_name;
        let mut seen = HashSet::new();

        for field in self.fields {
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField {
                    entity,
                    field: field.name,
                });
            }

            let is_enum = field.field_type == FieldType::Enum;
            match field.enum_values {
                None | Some([]) if is_enum => {
                    return Err(SchemaError::EmptyEnum {
                        entity,
                        field: field.name,
                    });
                }
                Some(_) if !is_enum => {
                    return Err(SchemaError::UnexpectedEnumValues {
                        entity,
                        field: field.name,
                    });
                }
                _ => {}
            }

            if field.filterable && !field.field_type.is_discrete() {
                return Err(SchemaError::FilterNotDiscrete {
                    entity,
                    field: field.name,
                });
            }
        }

        let search = self.entity.search_field;
        match self.field(search) {
            None => Err(SchemaError::UnknownSearchField {
                entity,
                field: search,
            }),
            Some(f) if !f.searchable => Err(SchemaError::SearchFieldNotSearchable {
                entity,
                field: search,
            }),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{EntityUiMetadata, FieldUiMetadata, ValidationRules};

    static ENTITY: EntityMetadataInfo = EntityMetadataInfo {
        schema_version: "1.0",
        entity_name: "widget",
        entity_index: "t001",
        collection_name: "widgets",
        id_prefix: "W",
        search_field: "name",
        ui: EntityUiMetadata {
            element_name: "Widget",
            list_name: "Widgets",
            icon: None,
            group: "test",
        },
    };

    const fn field(
        name: &'static str,
        field_type: FieldType,
        searchable: bool,
        filterable: bool,
        enum_values: Option<&'static [&'static str]>,
    ) -> FieldMetadata {
        FieldMetadata {
            name,
            field_type,
            ui: FieldUiMetadata {
                label: name,
                placeholder: None,
                hint: None,
                visible_in_list: true,
                visible_in_form: true,
                widget: None,
                column_width: None,
            },
            validation: ValidationRules::none(),
            searchable,
            filterable,
            enum_values,
        }
    }

    static VALID: &[FieldMetadata] = &[
        field("name", FieldType::String, true, false, None),
        field("color", FieldType::Enum, false, true, Some(&["red", "blue"])),
        field("in_stock", FieldType::Boolean, false, true, None),
    ];

    static DUPLICATE: &[FieldMetadata] = &[
        field("name", FieldType::String, true, false, None),
        field("name", FieldType::Number, false, false, None),
    ];

    static EMPTY_ENUM: &[FieldMetadata] = &[
        field("name", FieldType::String, true, false, None),
        field("color", FieldType::Enum, false, false, Some(&[])),
    ];

    static TEXT_FILTER: &[FieldMetadata] = &[
        field("name", FieldType::String, true, true, None),
    ];

    static NOT_SEARCHABLE: &[FieldMetadata] = &[
        field("name", FieldType::String, false, false, None),
    ];

    #[test]
    fn test_valid_schema_passes() {
        let schema = EntitySchema::new(&ENTITY, VALID);
        assert_eq!(schema.check(), Ok(()));
        assert_eq!(schema.search_field().map(|f| f.name), Some("name"));
        let filters: Vec<_> = schema.filterable_fields().map(|f| f.name).collect();
        assert_eq!(filters, vec!["color", "in_stock"]);
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let schema = EntitySchema::new(&ENTITY, DUPLICATE);
        assert_eq!(
            schema.check(),
            Err(SchemaError::DuplicateField {
                entity: "widget",
                field: "name"
            })
        );
    }

    #[test]
    fn test_enum_without_values_rejected() {
        let schema = EntitySchema::new(&ENTITY, EMPTY_ENUM);
        assert!(matches!(schema.check(), Err(SchemaError::EmptyEnum { field: "color", .. })));
    }

    #[test]
    fn test_free_text_filter_rejected() {
        let schema = EntitySchema::new(&ENTITY, TEXT_FILTER);
        assert!(matches!(
            schema.check(),
            Err(SchemaError::FilterNotDiscrete { field: "name", .. })
        ));
    }

    #[test]
    fn test_search_field_must_be_searchable() {
        let schema = EntitySchema::new(&ENTITY, NOT_SEARCHABLE);
        assert!(matches!(
            schema.check(),
            Err(SchemaError::SearchFieldNotSearchable { .. })
        ));
    }
}
