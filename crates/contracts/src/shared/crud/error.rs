use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field validation messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Errors of the entity layer. None of them is fatal; views present them inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: String, id: String },

    #[error("{kind} with id '{id}' already exists")]
    DuplicateId { kind: String, id: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Unknown entity type '{0}'")]
    UnknownKind(String),
}

impl EntityError {
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    pub fn duplicate_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Stable machine-readable code, used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::DuplicateId { .. } => "duplicate_id",
            Self::Validation(_) => "validation",
            Self::UnknownKind(_) => "unknown_kind",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::UnknownKind(_))
    }
}

/// JSON body the backend sends for a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "ValidationErrors::is_empty")]
    pub fields: ValidationErrors,
}

impl From<&EntityError> for ErrorBody {
    fn from(err: &EntityError) -> Self {
        let (entity, id, fields) = match err {
            EntityError::NotFound { kind, id } | EntityError::DuplicateId { kind, id } => {
                (Some(kind.clone()), Some(id.clone()), ValidationErrors::new())
            }
            EntityError::Validation(fields) => (None, None, fields.clone()),
            EntityError::UnknownKind(slug) => (Some(slug.clone()), None, ValidationErrors::new()),
        };
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
            entity,
            id,
            fields,
        }
    }
}

impl ErrorBody {
    /// Rebuild the domain error on the client side. Unknown codes yield `None`.
    pub fn into_entity_error(self) -> Option<EntityError> {
        let entity = self.entity.unwrap_or_default();
        match self.code.as_str() {
            "not_found" => Some(EntityError::not_found(entity, self.id.unwrap_or_default())),
            "duplicate_id" => Some(EntityError::duplicate_id(entity, self.id.unwrap_or_default())),
            "validation" => Some(EntityError::Validation(self.fields)),
            "unknown_kind" => Some(EntityError::UnknownKind(entity)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_round_trip() {
        let errors = [
            EntityError::not_found("courses", "COURSE999"),
            EntityError::duplicate_id("courses", "COURSE101"),
            EntityError::UnknownKind("spaceships".into()),
            {
                let mut fields = ValidationErrors::new();
                fields.insert("title", "Title is required");
                EntityError::Validation(fields)
            },
        ];

        for err in errors {
            let body = ErrorBody::from(&err);
            let json = serde_json::to_string(&body).unwrap();
            let parsed: ErrorBody = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.into_entity_error(), Some(err));
        }
    }

    #[test]
    fn test_unknown_code_is_not_an_entity_error() {
        let body = ErrorBody {
            error: "boom".into(),
            code: "internal".into(),
            entity: None,
            id: None,
            fields: ValidationErrors::new(),
        };
        assert_eq!(body.into_entity_error(), None);
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let mut fields = ValidationErrors::new();
        fields.insert("a", "A is required");
        fields.insert("b", "B is required");
        assert_eq!(fields.to_string(), "A is required; B is required");
        assert_eq!(
            EntityError::Validation(fields).to_string(),
            "Validation failed: A is required; B is required"
        );
    }
}
