use crate::domain::common::{value_text, EntityRecord};
use crate::shared::metadata::{EntitySchema, FieldMetadata, FieldType};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// Color of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Warning,
    Error,
    Neutral,
    Primary,
}

impl BadgeTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Neutral => "neutral",
            Self::Primary => "primary",
        }
    }

    /// Tone for common status words; anything unrecognised is neutral
    pub fn for_status(value: &str) -> Self {
        match value {
            "active" | "published" | "delivered" | "completed" | "approved" | "paid"
            | "received" | "graduated" | "open" | "refunded" | "returned" | "true" => {
                Self::Success
            }
            "pending" | "in_transit" | "draft" | "processing" | "requested" | "reserved"
            | "ordered" => Self::Warning,
            "cancelled" | "rejected" | "overdue" | "dropped" | "closed" => Self::Error,
            "shipped" => Self::Primary,
            _ => Self::Neutral,
        }
    }
}

/// How one field value is presented on the detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayValue {
    Empty,
    Text(String),
    Number(String),
    /// Calendar date; the frontend formats it in the viewer's locale
    Date(NaiveDate),
    YesNo(bool),
    Badge { text: String, tone: BadgeTone },
}

impl DisplayValue {
    pub fn from_field(field: &FieldMetadata, value: Option<&Value>) -> Self {
        let value = match value {
            None | Some(Value::Null) => return Self::Empty,
            Some(Value::String(s)) if s.trim().is_empty() => return Self::Empty,
            Some(v) => v,
        };

        match field.field_type {
            FieldType::Boolean => {
                let flag = match value {
                    Value::Bool(b) => *b,
                    other => value_text(other) == "true",
                };
                if field.renders_as_badge() {
                    Self::Badge {
                        text: if flag { "Yes" } else { "No" }.to_string(),
                        tone: if flag { BadgeTone::Success } else { BadgeTone::Neutral },
                    }
                } else {
                    Self::YesNo(flag)
                }
            }
            FieldType::Enum if field.renders_as_badge() => {
                let raw = value_text(value);
                Self::Badge {
                    tone: BadgeTone::for_status(&raw),
                    text: humanize(&raw),
                }
            }
            FieldType::Enum => Self::Text(humanize(&value_text(value))),
            FieldType::Number => match value.as_f64() {
                Some(n) if field.ui.widget == Some("money") => Self::Number(format!("{:.2}", n)),
                _ => Self::Number(value_text(value)),
            },
            FieldType::Date => {
                let raw = value_text(value);
                // Accept both plain dates and full timestamps
                let day = raw.get(..10).unwrap_or(&raw);
                match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
                    Ok(date) => Self::Date(date),
                    Err(_) => Self::Text(raw),
                }
            }
            FieldType::String => Self::Text(value_text(value)),
        }
    }

    /// Locale-independent text, used by tests and non-browser callers
    pub fn plain_text(&self) -> String {
        match self {
            Self::Empty => "—".to_string(),
            Self::Text(s) | Self::Number(s) => s.clone(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::YesNo(true) => "Yes".to_string(),
            Self::YesNo(false) => "No".to_string(),
            Self::Badge { text, .. } => text.clone(),
        }
    }
}

/// "in_transit" -> "In transit"
pub fn humanize(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub name: &'static str,
    pub label: &'static str,
    pub value: DisplayValue,
}

/// What the detail page shows for a given id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DetailModel {
    NotFound { id: String },
    Found { id: String, rows: Vec<DetailRow> },
}

impl DetailModel {
    /// One row per schema field, in declaration order
    pub fn build(schema: &EntitySchema, id: &str, record: Option<&EntityRecord>) -> Self {
        let Some(record) = record else {
            return Self::NotFound { id: id.to_string() };
        };

        let rows = schema
            .fields()
            .iter()
            .map(|field| DetailRow {
                name: field.name,
                label: field.ui.label,
                value: DisplayValue::from_field(field, record.get(field.name)),
            })
            .collect();

        Self::Found {
            id: record.id.clone(),
            rows,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityKind;

    fn row<'a>(model: &'a DetailModel, name: &str) -> &'a DetailRow {
        match model {
            DetailModel::Found { rows, .. } => rows.iter().find(|r| r.name == name).unwrap(),
            DetailModel::NotFound { .. } => panic!("expected a found model"),
        }
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let model = DetailModel::build(&EntityKind::Course.schema(), "COURSE999", None);
        assert_eq!(
            model,
            DetailModel::NotFound {
                id: "COURSE999".to_string()
            }
        );
    }

    #[test]
    fn test_rows_follow_schema_order() {
        let schema = EntityKind::Course.schema();
        let record = EntityRecord::new("COURSE101").with_field("title", "Rust for Beginners");
        let model = DetailModel::build(&schema, "COURSE101", Some(&record));

        let DetailModel::Found { id, rows } = &model else {
            panic!("expected a found model");
        };
        assert_eq!(id, "COURSE101");
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        let expected: Vec<_> = schema.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, expected);
        assert_eq!(row(&model, "title").label, "Title");
        assert_eq!(row(&model, "instructor").value, DisplayValue::Empty);
    }

    #[test]
    fn test_value_presentation() {
        let record = EntityRecord::new("COURSE101")
            .with_field("price", 49)
            .with_field("start_date", "2024-03-01")
            .with_field("status", "published")
            .with_field("featured", true)
            .with_field("level", "beginner");
        let model = DetailModel::build(&EntityKind::Course.schema(), "COURSE101", Some(&record));

        assert_eq!(row(&model, "price").value.plain_text(), "49.00");
        assert_eq!(
            row(&model, "start_date").value,
            DisplayValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert_eq!(
            row(&model, "status").value,
            DisplayValue::Badge {
                text: "Published".to_string(),
                tone: BadgeTone::Success
            }
        );
        assert_eq!(row(&model, "featured").value, DisplayValue::YesNo(true));
        assert_eq!(row(&model, "level").value.plain_text(), "Beginner");
    }

    #[test]
    fn test_boolean_badge_widget() {
        let record = EntityRecord::new("SUP101").with_field("preferred", false);
        let model = DetailModel::build(&EntityKind::Supplier.schema(), "SUP101", Some(&record));
        assert_eq!(
            row(&model, "preferred").value,
            DisplayValue::Badge {
                text: "No".to_string(),
                tone: BadgeTone::Neutral
            }
        );
    }

    #[test]
    fn test_unparseable_date_is_kept_as_text() {
        let record = EntityRecord::new("COURSE101").with_field("start_date", "soon");
        let model = DetailModel::build(&EntityKind::Course.schema(), "COURSE101", Some(&record));
        assert_eq!(row(&model, "start_date").value, DisplayValue::Text("soon".into()));
    }

    #[test]
    fn test_humanize_and_tones() {
        assert_eq!(humanize("in_transit"), "In transit");
        assert_eq!(humanize(""), "");
        assert_eq!(BadgeTone::for_status("in_transit"), BadgeTone::Warning);
        assert_eq!(BadgeTone::for_status("overdue"), BadgeTone::Error);
        assert_eq!(BadgeTone::for_status("something_else"), BadgeTone::Neutral);
    }
}
