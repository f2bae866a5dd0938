use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::{EntityKind, EntityRecord, RecordDraft, RecordPatch};
use contracts::shared::crud::ListQuery;

use crate::shared::api_error::ApiError;
use crate::shared::app_state::AppState;

pub(crate) fn resolve_kind(slug: &str) -> Result<EntityKind, ApiError> {
    slug.parse::<EntityKind>().map_err(|e| {
        tracing::debug!("Unknown entity slug '{}'", slug);
        ApiError(e)
    })
}

/// GET /api/entity/:slug?search=&<field>=
pub async fn list(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EntityRecord>>, ApiError> {
    let kind = resolve_kind(&slug)?;
    let records = state.data.list(kind).await;

    if query.is_empty() {
        return Ok(Json(records));
    }
    let rows = query.apply(&kind.schema(), &records).into_rows();
    tracing::debug!(
        "{}: {} of {} records match {:?}",
        kind,
        rows.len(),
        records.len(),
        query
    );
    Ok(Json(rows))
}

/// GET /api/entity/:slug/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Result<Json<EntityRecord>, ApiError> {
    let kind = resolve_kind(&slug)?;
    match state.data.get(kind, &id).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            tracing::debug!("{}: {}", kind, e);
            Err(ApiError(e))
        }
    }
}

/// POST /api/entity/:slug
pub async fn create(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(draft): Json<RecordDraft>,
) -> Result<(StatusCode, Json<EntityRecord>), ApiError> {
    let kind = resolve_kind(&slug)?;
    match state.data.create(kind, draft).await {
        Ok(record) => {
            tracing::info!("{}: created {}", kind, record.id);
            Ok((StatusCode::CREATED, Json(record)))
        }
        Err(e) => {
            tracing::warn!("{}: create rejected: {}", kind, e);
            Err(ApiError(e))
        }
    }
}

/// PUT /api/entity/:slug/:id
pub async fn update(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
    Json(patch): Json<RecordPatch>,
) -> Result<Json<EntityRecord>, ApiError> {
    let kind = resolve_kind(&slug)?;
    match state.data.update(kind, &id, patch).await {
        Ok(record) => {
            tracing::info!("{}: updated {}", kind, record.id);
            Ok(Json(record))
        }
        Err(e) => {
            tracing::warn!("{}: update rejected: {}", kind, e);
            Err(ApiError(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::MockDataSource;
    use contracts::shared::crud::EntityError;
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(MockDataSource::default().with_records(
            EntityKind::Course,
            vec![
                EntityRecord::new("COURSE101")
                    .with_field("title", "Rust for Beginners")
                    .with_field("status", "published"),
                EntityRecord::new("COURSE102")
                    .with_field("title", "Practical UI Design")
                    .with_field("status", "published"),
            ],
        ))
    }

    fn path(slug: &str) -> Path<String> {
        Path(slug.to_string())
    }

    fn id_path(slug: &str, id: &str) -> Path<(String, String)> {
        Path((slug.to_string(), id.to_string()))
    }

    #[tokio::test]
    async fn test_list_without_query_returns_all() {
        let Json(rows) = list(State(state()), path("courses"), Query(ListQuery::default()))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_list_applies_search_and_filters() {
        let query = ListQuery::default().with_search("RUST");
        let Json(rows) = list(State(state()), path("courses"), Query(query))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "COURSE101");

        let query = ListQuery::default().with_filter("status", "draft");
        let Json(rows) = list(State(state()), path("courses"), Query(query))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_list_decodes_urlencoded_query_string() {
        let uri: axum::http::Uri = "/api/entity/courses?search=rust%20for&status=published"
            .parse()
            .unwrap();
        let Query(query) = Query::<ListQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.search, "rust for");
        assert_eq!(query.filters.get("status").map(String::as_str), Some("published"));

        let Json(rows) = list(State(state()), path("courses"), Query(query))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "COURSE101");
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let err = list(State(state()), path("spaceships"), Query(ListQuery::default()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.0, EntityError::UnknownKind("spaceships".into()));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let Json(record) = get_by_id(State(state()), id_path("courses", "COURSE101"))
            .await
            .unwrap();
        assert_eq!(record.text("title"), "Rust for Beginners");

        let err = get_by_id(State(state()), id_path("courses", "COURSE999"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let state = state();
        let draft: RecordDraft = serde_json::from_value(json!({"title": "Async Rust"})).unwrap();

        let (status, Json(created)) = create(State(state.clone()), path("courses"), Json(draft))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.id, "COURSE103");

        let Json(rows) = list(State(state), path("courses"), Query(ListQuery::default()))
            .await
            .unwrap();
        assert_eq!(rows.last().map(|r| r.id.as_str()), Some("COURSE103"));
    }

    #[tokio::test]
    async fn test_create_duplicate_is_409() {
        let draft: RecordDraft =
            serde_json::from_value(json!({"id": "COURSE101", "title": "Again"})).unwrap();
        let err = create(State(state()), path("courses"), Json(draft))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_keeps_untouched_fields() {
        let state = state();
        let patch = RecordPatch::default().with_field("status", "archived");

        let Json(updated) = update(State(state.clone()), id_path("courses", "COURSE102"), Json(patch))
            .await
            .unwrap();
        assert_eq!(updated.id, "COURSE102");
        assert_eq!(updated.text("status"), "archived");
        assert_eq!(updated.text("title"), "Practical UI Design");

        let err = update(
            State(state),
            id_path("courses", "COURSE999"),
            Json(RecordPatch::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
