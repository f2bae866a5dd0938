use crate::domain::common::EntityRecord;
use crate::shared::metadata::{EntitySchema, FieldType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Search text plus discrete filters of a list view.
///
/// On the wire it is a flat query string: `?search=rust&status=draft`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,

    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

/// Result of applying a query to a collection
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    Rows(Vec<EntityRecord>),
    NoResults,
}

impl ListOutcome {
    pub fn rows(&self) -> &[EntityRecord] {
        match self {
            Self::Rows(rows) => rows,
            Self::NoResults => &[],
        }
    }

    pub fn into_rows(self) -> Vec<EntityRecord> {
        match self {
            Self::Rows(rows) => rows,
            Self::NoResults => Vec::new(),
        }
    }
}

impl ListQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// No search text and no effective filter
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.filters.values().all(|v| v.is_empty())
    }

    /// Whether one record satisfies the search AND every active filter.
    ///
    /// Filters on fields the schema does not mark filterable are ignored.
    pub fn matches(&self, schema: &EntitySchema, record: &EntityRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let haystack = schema
                .search_field()
                .map(|f| record.text(f.name))
                .unwrap_or_default()
                .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }

        self.filters.iter().all(|(name, expected)| {
            if expected.is_empty() {
                return true;
            }
            match schema.field(name) {
                Some(field) if field.filterable => record.text(field.name) == *expected,
                _ => true,
            }
        })
    }

    /// Records matching the query, in their original order
    pub fn filter<'a>(
        &'a self,
        schema: &'a EntitySchema,
        records: &'a [EntityRecord],
    ) -> impl Iterator<Item = &'a EntityRecord> + 'a {
        records.iter().filter(move |r| self.matches(schema, r))
    }

    pub fn apply(&self, schema: &EntitySchema, records: &[EntityRecord]) -> ListOutcome {
        let rows: Vec<EntityRecord> = self.filter(schema, records).cloned().collect();
        if rows.is_empty() {
            ListOutcome::NoResults
        } else {
            ListOutcome::Rows(rows)
        }
    }
}

/// Allowed values of one discrete filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub field: &'static str,
    pub label: &'static str,
    pub values: Vec<&'static str>,
}

pub fn filter_options(schema: &EntitySchema) -> Vec<FilterOption> {
    schema
        .filterable_fields()
        .filter_map(|f| {
            let values = match f.field_type {
                FieldType::Enum => f.choices().to_vec(),
                FieldType::Boolean => vec!["true", "false"],
                _ => return None,
            };
            Some(FilterOption {
                field: f.name,
                label: f.ui.label,
                values,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityKind;

    fn courses() -> Vec<EntityRecord> {
        vec![
            EntityRecord::new("COURSE101")
                .with_field("title", "Rust for Beginners")
                .with_field("category", "development")
                .with_field("status", "published")
                .with_field("featured", true),
            EntityRecord::new("COURSE102")
                .with_field("title", "Brand Design Basics")
                .with_field("category", "design")
                .with_field("status", "draft")
                .with_field("featured", false),
            EntityRecord::new("COURSE103")
                .with_field("title", "Advanced RUST patterns")
                .with_field("category", "development")
                .with_field("status", "draft")
                .with_field("featured", false),
        ]
    }

    fn ids(outcome: &ListOutcome) -> Vec<&str> {
        outcome.rows().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let schema = EntityKind::Course.schema();
        let query = ListQuery::default().with_search("  rUsT ");
        let outcome = query.apply(&schema, &courses());
        assert_eq!(ids(&outcome), vec!["COURSE101", "COURSE103"]);
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let schema = EntityKind::Course.schema();
        let query = ListQuery::default().with_search("   ").with_filter("status", "");
        assert!(query.is_empty());
        assert_eq!(query.apply(&schema, &courses()).rows().len(), 3);
    }

    #[test]
    fn test_search_and_filters_compose_with_and() {
        let schema = EntityKind::Course.schema();
        let query = ListQuery::default()
            .with_search("rust")
            .with_filter("status", "draft")
            .with_filter("category", "development");
        assert_eq!(ids(&query.apply(&schema, &courses())), vec!["COURSE103"]);
    }

    #[test]
    fn test_boolean_filter_uses_text_value() {
        let schema = EntityKind::Course.schema();
        let query = ListQuery::default().with_filter("featured", "true");
        assert_eq!(ids(&query.apply(&schema, &courses())), vec!["COURSE101"]);
    }

    #[test]
    fn test_non_filterable_field_is_ignored() {
        let schema = EntityKind::Course.schema();
        let query = ListQuery::default()
            .with_filter("title", "nothing like this")
            .with_filter("no_such_field", "x");
        assert_eq!(query.apply(&schema, &courses()).rows().len(), 3);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let schema = EntityKind::Course.schema();
        let query = ListQuery::default().with_search("rust").with_filter("status", "draft");
        let once = query.apply(&schema, &courses()).into_rows();
        let twice = query.apply(&schema, &once).into_rows();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_matching_filter_yields_no_results() {
        let schema = EntityKind::Course.schema();
        let records = vec![EntityRecord::new("COURSE101").with_field("status", "published")];
        let outcome = ListQuery::default()
            .with_filter("status", "draft")
            .apply(&schema, &records);
        assert_eq!(outcome, ListOutcome::NoResults);
        assert!(outcome.rows().is_empty());
    }

    #[test]
    fn test_query_string_shape() {
        let query: ListQuery =
            serde_json::from_value(serde_json::json!({"search": "rust", "status": "draft"}))
                .unwrap();
        assert_eq!(query.search, "rust");
        assert_eq!(query.filters.get("status").map(String::as_str), Some("draft"));

        let query: ListQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_filter_options_follow_schema() {
        let options = filter_options(&EntityKind::Course.schema());
        let fields: Vec<_> = options.iter().map(|o| o.field).collect();
        assert_eq!(fields, vec!["category", "level", "status", "featured"]);

        let status = options.iter().find(|o| o.field == "status").unwrap();
        assert_eq!(status.values, vec!["draft", "published", "archived"]);
        let featured = options.iter().find(|o| o.field == "featured").unwrap();
        assert_eq!(featured.values, vec!["true", "false"]);
    }
}
