//! Form state machine shared by the create and update pages.
//!
//! `Editing -> Submitting -> Navigated`, or back to `Editing` when the data
//! source rejects the submission.

use super::error::{EntityError, ValidationErrors};
use crate::domain::common::{value_text, EntityRecord, RecordDraft, RecordPatch};
use crate::shared::metadata::{EntitySchema, FieldMetadata, FieldType};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Navigated,
}

/// What the form hands to the data source
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(RecordDraft),
    Update { id: String, patch: RecordPatch },
}

/// Why `begin_submit` did not start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    NotEditing,
    Invalid(ValidationErrors),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    schema: EntitySchema,
    mode: FormMode,
    phase: FormPhase,
    values: BTreeMap<String, String>,
    errors: ValidationErrors,
    form_error: Option<String>,
}

impl FormModel {
    /// Empty form. Booleans start as `false`, enums stay unselected.
    pub fn create(schema: EntitySchema) -> Self {
        let values = schema
            .form_fields()
            .map(|f| {
                let initial = match f.field_type {
                    FieldType::Boolean => "false",
                    _ => "",
                };
                (f.name.to_string(), initial.to_string())
            })
            .collect();
        Self::with_values(schema, FormMode::Create, values)
    }

    /// Form pre-populated from a stored record
    pub fn edit(schema: EntitySchema, record: &EntityRecord) -> Self {
        let values = schema
            .form_fields()
            .map(|f| (f.name.to_string(), input_from_value(f, record.get(f.name))))
            .collect();
        Self::with_values(
            schema,
            FormMode::Update {
                id: record.id.clone(),
            },
            values,
        )
    }

    fn with_values(schema: EntitySchema, mode: FormMode, values: BTreeMap<String, String>) -> Self {
        Self {
            schema,
            mode,
            phase: FormPhase::Editing,
            values,
            errors: ValidationErrors::new(),
            form_error: None,
        }
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Change one input. Returns `false` when the edit is refused: the form is
    /// not editable, the field is not on the form, or an enum value is not one
    /// of the declared choices.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        let Some(meta) = self.schema.field(field).filter(|f| f.visible_in_form()) else {
            return false;
        };
        let value = value.into();
        if !value.is_empty() && !meta.accepts_choice(&value) {
            return false;
        }
        self.values.insert(field.to_string(), value);
        self.errors.remove(field);
        true
    }

    /// Missing required fields, keyed by field name
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in self.schema.form_fields() {
            if let Err(message) = field
                .validation
                .validate_input(self.value(field.name), field.ui.label)
            {
                errors.insert(field.name, message);
            }
        }
        errors
    }

    /// Validate and, if clean, move to `Submitting` and build the payload
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.phase != FormPhase::Editing {
            return Err(SubmitBlocked::NotEditing);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.errors = ValidationErrors::new();
        self.form_error = None;
        self.phase = FormPhase::Submitting;

        let fields = self.schema.form_fields().map(|f| {
            (f.name.to_string(), value_from_input(f, self.value(f.name)))
        });

        Ok(match &self.mode {
            FormMode::Create => Submission::Create(RecordDraft {
                id: None,
                fields: fields.filter(|(_, v)| !v.is_null()).collect(),
            }),
            FormMode::Update { id } => Submission::Update {
                id: id.clone(),
                patch: RecordPatch {
                    fields: fields.collect(),
                },
            },
        })
    }

    /// Settle a pending submission. Returns `true` when the form is done and
    /// the caller should navigate away.
    pub fn finish_submit(&mut self, result: Result<EntityRecord, EntityError>) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        match result {
            Ok(_) => {
                self.phase = FormPhase::Navigated;
                true
            }
            Err(EntityError::Validation(errors)) => {
                self.errors = errors;
                self.phase = FormPhase::Editing;
                false
            }
            Err(err) => {
                self.form_error = Some(err.to_string());
                self.phase = FormPhase::Editing;
                false
            }
        }
    }

    /// Settle a pending submission that never reached the data source
    /// (network failure, unreadable response).
    pub fn abort_submit(&mut self, message: impl Into<String>) {
        if self.phase == FormPhase::Submitting {
            self.form_error = Some(message.into());
            self.phase = FormPhase::Editing;
        }
    }

    /// Leave without saving. Ignored while a submission is in flight.
    pub fn cancel(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Navigated;
        true
    }

    pub fn title(&self) -> String {
        let name = self.schema.entity().ui.element_name;
        match &self.mode {
            FormMode::Create => format!("New {}", name),
            FormMode::Update { id } => format!("Edit {} {}", name, id),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (&self.phase, &self.mode) {
            (FormPhase::Submitting, _) => "Saving…",
            (_, FormMode::Create) => "Create",
            (_, FormMode::Update { .. }) => "Save",
        }
    }
}

/// Stored value -> text shown in the input
pub fn input_from_value(field: &FieldMetadata, value: Option<&Value>) -> String {
    match (field.field_type, value) {
        (_, None) | (_, Some(Value::Null)) => match field.field_type {
            FieldType::Boolean => "false".to_string(),
            _ => String::new(),
        },
        (FieldType::Boolean, Some(Value::Bool(b))) => b.to_string(),
        (_, Some(v)) => value_text(v),
    }
}

/// Input text -> stored value, by field type
pub fn value_from_input(field: &FieldMetadata, input: &str) -> Value {
    let trimmed = input.trim();
    match field.field_type {
        FieldType::Boolean => Value::Bool(trimmed == "true"),
        _ if trimmed.is_empty() => Value::Null,
        FieldType::Number => parse_number(trimmed).unwrap_or_else(|| Value::String(input.to_string())),
        _ => Value::String(input.to_string()),
    }
}

fn parse_number(text: &str) -> Option<Value> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityKind;
    use serde_json::json;

    fn filled_course_form() -> FormModel {
        let mut form = FormModel::create(EntityKind::Course.schema());
        assert!(form.set_value("title", "Rust for Beginners"));
        assert!(form.set_value("instructor", "Ferris"));
        assert!(form.set_value("category", "development"));
        assert!(form.set_value("price", "49"));
        assert!(form.set_value("status", "draft"));
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = FormModel::create(EntityKind::Course.schema());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.value("featured"), "false");
        assert_eq!(form.value("status"), "");
        assert_eq!(form.submit_label(), "Create");
        assert_eq!(form.title(), "New Course");
    }

    #[test]
    fn test_required_fields_block_submit() {
        let mut form = FormModel::create(EntityKind::Course.schema());
        let blocked = form.begin_submit().unwrap_err();

        let SubmitBlocked::Invalid(errors) = blocked else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert!(errors.get("level").is_none());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.field_error("title"), Some("Title is required"));
    }

    #[test]
    fn test_enum_accepts_only_declared_choices() {
        let mut form = FormModel::create(EntityKind::Course.schema());
        assert!(!form.set_value("status", "deleted"));
        assert_eq!(form.value("status"), "");
        assert!(form.set_value("status", "archived"));
        assert!(form.set_value("status", ""));
    }

    #[test]
    fn test_create_submission_payload() {
        let mut form = filled_course_form();
        let submission = form.begin_submit().unwrap();

        let Submission::Create(draft) = submission else {
            panic!("expected a create submission");
        };
        assert_eq!(draft.id, None);
        assert_eq!(draft.fields.get("price"), Some(&json!(49)));
        assert_eq!(draft.fields.get("featured"), Some(&json!(false)));
        assert!(!draft.fields.contains_key("start_date"));
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(form.submit_label(), "Saving…");
    }

    #[test]
    fn test_submitting_rejects_edits_and_cancel() {
        let mut form = filled_course_form();
        form.begin_submit().unwrap();

        assert!(!form.set_value("title", "Changed"));
        assert_eq!(form.value("title"), "Rust for Beginners");
        assert!(!form.cancel());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::NotEditing));
    }

    #[test]
    fn test_failure_returns_to_editing_with_error() {
        let mut form = filled_course_form();
        form.begin_submit().unwrap();

        let navigated = form.finish_submit(Err(EntityError::duplicate_id("courses", "COURSE101")));

        assert!(!navigated);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(
            form.form_error(),
            Some("courses with id 'COURSE101' already exists")
        );
        assert!(form.set_value("title", "Rust again"));
    }

    #[test]
    fn test_field_errors_from_data_source() {
        let mut form = filled_course_form();
        form.begin_submit().unwrap();

        let mut errors = ValidationErrors::new();
        errors.insert("price", "Price must be positive");
        form.finish_submit(Err(EntityError::Validation(errors)));

        assert_eq!(form.field_error("price"), Some("Price must be positive"));
        assert_eq!(form.form_error(), None);
    }

    #[test]
    fn test_aborted_submission_keeps_values() {
        let mut form = filled_course_form();
        form.begin_submit().unwrap();
        form.abort_submit("Network error");

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.form_error(), Some("Network error"));
        assert_eq!(form.value("title"), "Rust for Beginners");

        // No effect outside a submission
        form.abort_submit("late");
        assert_eq!(form.form_error(), Some("Network error"));
    }

    #[test]
    fn test_success_navigates() {
        let mut form = filled_course_form();
        form.begin_submit().unwrap();
        assert!(form.finish_submit(Ok(EntityRecord::new("COURSE104"))));
        assert_eq!(form.phase(), FormPhase::Navigated);
    }

    #[test]
    fn test_edit_prefills_and_builds_patch() {
        let record = EntityRecord::new("COURSE101")
            .with_field("title", "Rust for Beginners")
            .with_field("instructor", "Ferris")
            .with_field("category", "development")
            .with_field("price", 49.5)
            .with_field("status", "published")
            .with_field("featured", true);
        let mut form = FormModel::edit(EntityKind::Course.schema(), &record);

        assert_eq!(form.value("price"), "49.5");
        assert_eq!(form.value("featured"), "true");
        assert_eq!(form.submit_label(), "Save");

        assert!(form.set_value("status", "archived"));
        let Submission::Update { id, patch } = form.begin_submit().unwrap() else {
            panic!("expected an update submission");
        };
        assert_eq!(id, "COURSE101");
        assert_eq!(patch.fields.get("status"), Some(&json!("archived")));
        assert_eq!(patch.fields.get("start_date"), Some(&Value::Null));
        assert!(!patch.fields.contains_key("id"));
    }

    #[test]
    fn test_cancel_from_editing() {
        let mut form = FormModel::create(EntityKind::Course.schema());
        assert!(form.cancel());
        assert_eq!(form.phase(), FormPhase::Navigated);
    }

    #[test]
    fn test_number_input_conversion() {
        let schema = EntityKind::Course.schema();
        let price = schema.field("price").unwrap();
        assert_eq!(value_from_input(price, "12"), json!(12));
        assert_eq!(value_from_input(price, "12.25"), json!(12.25));
        assert_eq!(value_from_input(price, "twelve"), json!("twelve"));
        assert_eq!(value_from_input(price, "  "), Value::Null);
    }
}
