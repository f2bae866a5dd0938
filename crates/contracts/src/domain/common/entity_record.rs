use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One record of any entity kind.
///
/// Serialized flat: `{"id": "COURSE101", "title": "...", "status": "published"}`.
/// `id` is immutable once the record is stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,

    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style setter, mostly for fixtures and tests
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field value as plain text ("" when missing)
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(value_text).unwrap_or_default()
    }

    /// Merge patch fields into the record. `id` is never touched.
    pub fn apply_patch(&mut self, patch: &RecordPatch) {
        for (name, value) in &patch.fields {
            if name == "id" {
                continue;
            }
            self.fields.insert(name.clone(), value.clone());
        }
    }
}

/// Payload for creating a record; `id` is generated when absent or blank
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl RecordDraft {
    /// Requested id, if the caller supplied a non-blank one
    pub fn requested_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn into_record(self, id: String) -> EntityRecord {
        EntityRecord {
            id,
            fields: self.fields,
        }
    }
}

/// Partial update: fields present here replace the stored ones
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl RecordPatch {
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// Plain-text rendering of a stored value
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_flat() {
        let record = EntityRecord::new("COURSE101")
            .with_field("title", "Rust Basics")
            .with_field("price", 49);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"id": "COURSE101", "title": "Rust Basics", "price": 49})
        );

        let back: EntityRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_patch_never_changes_id() {
        let mut record = EntityRecord::new("JOB101")
            .with_field("title", "Backend engineer")
            .with_field("status", "open");
        let patch: RecordPatch =
            serde_json::from_value(json!({"id": "JOB999", "status": "closed"})).unwrap();

        record.apply_patch(&patch);

        assert_eq!(record.id, "JOB101");
        assert_eq!(record.text("status"), "closed");
        assert_eq!(record.text("title"), "Backend engineer");
    }

    #[test]
    fn test_draft_blank_id_is_absent() {
        let draft: RecordDraft =
            serde_json::from_value(json!({"id": "  ", "title": "x"})).unwrap();
        assert_eq!(draft.requested_id(), None);

        let draft: RecordDraft = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert_eq!(draft.id, None);
        assert_eq!(draft.fields.get("title"), Some(&json!("x")));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!(12.5)), "12.5");
        assert_eq!(value_text(&json!("draft")), "draft");
    }
}
