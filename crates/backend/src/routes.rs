use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::app_state::AppState;

/// All API routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SCHEMA
        // ========================================
        .route("/api/schema", get(handlers::schema::list_entities))
        .route("/api/schema/:slug", get(handlers::schema::get_schema))
        // ========================================
        // ENTITIES
        // ========================================
        .route(
            "/api/entity/:slug",
            get(handlers::entity::list).post(handlers::entity::create),
        )
        .route(
            "/api/entity/:slug/:id",
            get(handlers::entity::get_by_id).put(handlers::entity::update),
        )
        .with_state(state)
}
