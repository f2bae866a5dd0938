use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::common::{EntityKind, EntitySummary};
use contracts::shared::crud::{filter_options, FilterOption};
use contracts::shared::metadata::EntitySchema;
use serde::Serialize;

use super::entity::resolve_kind;
use crate::shared::api_error::ApiError;
use crate::shared::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub summary: EntitySummary,
    pub schema: EntitySchema,
    pub filters: Vec<FilterOption>,
}

/// GET /api/schema
pub async fn list_entities(State(state): State<AppState>) -> Json<Vec<EntitySummary>> {
    let mut summaries = Vec::with_capacity(EntityKind::ALL.len());
    for kind in EntityKind::all() {
        let count = state.data.count(*kind).await;
        summaries.push(EntitySummary::new(*kind, count));
    }
    Json(summaries)
}

/// GET /api/schema/:slug
pub async fn get_schema(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SchemaResponse>, ApiError> {
    let kind = resolve_kind(&slug)?;
    let schema = kind.schema();
    Ok(Json(SchemaResponse {
        summary: EntitySummary::new(kind, state.data.count(kind).await),
        filters: filter_options(&schema),
        schema,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::MockDataSource;
    use contracts::domain::common::EntityRecord;

    #[tokio::test]
    async fn test_summaries_cover_every_kind_with_counts() {
        let state = AppState::new(MockDataSource::default().with_records(
            EntityKind::Job,
            vec![EntityRecord::new("JOB101"), EntityRecord::new("JOB102")],
        ));

        let Json(summaries) = list_entities(State(state)).await;

        assert_eq!(summaries.len(), EntityKind::ALL.len());
        let jobs = summaries.iter().find(|s| s.kind == EntityKind::Job).unwrap();
        assert_eq!(jobs.count, 2);
        assert_eq!(jobs.slug, "jobs");
        let courses = summaries.iter().find(|s| s.kind == EntityKind::Course).unwrap();
        assert_eq!(courses.count, 0);
    }

    #[tokio::test]
    async fn test_schema_for_slug() {
        let Json(response) = get_schema(State(AppState::in_memory()), Path("suppliers".into()))
            .await
            .unwrap();
        assert_eq!(response.summary.kind, EntityKind::Supplier);
        assert_eq!(response.schema.entity().search_field, "name");
        assert!(response.filters.iter().any(|f| f.field == "status"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["schema"]["entity"]["collection_name"], "suppliers");
    }

    #[tokio::test]
    async fn test_unknown_schema_slug() {
        assert!(get_schema(State(AppState::in_memory()), Path("nope".into()))
            .await
            .is_err());
    }
}
