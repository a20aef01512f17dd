//! waypoint-api library - remote store for events, members and travel state
//!
//! Serves the HTTP API the tracker hydrates from and pushes to. The
//! relational store is optional at startup: without it, member and
//! relationship routes answer 503 and event routes 500.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; `None` when the store is unconfigured
    pub db: Option<SqlitePool>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db: Some(db) }
    }

    /// State with no relational store behind it
    pub fn unconfigured() -> Self {
        Self { db: None }
    }

    /// Pool for event and travel routes (missing store is a generic failure)
    pub fn events_db(&self) -> ApiResult<&SqlitePool> {
        self.db
            .as_ref()
            .ok_or_else(|| ApiError::Internal("Database not configured".to_string()))
    }

    /// Pool for member and relationship routes (missing store is 503)
    pub fn members_db(&self) -> ApiResult<&SqlitePool> {
        self.db
            .as_ref()
            .ok_or_else(|| ApiError::Unavailable("Database not configured".to_string()))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/events", get(api::list_events).post(api::create_event))
        .route(
            "/events/:id",
            get(api::get_event)
                .patch(api::update_event)
                .delete(api::delete_event),
        )
        .route("/members", get(api::list_members).post(api::create_member))
        .route(
            "/members/:id",
            get(api::get_member)
                .patch(api::update_member)
                .delete(api::delete_member),
        )
        .route(
            "/relationships",
            get(api::list_relationships).post(api::create_relationship),
        )
        .route(
            "/relationships/:id",
            get(api::get_relationship)
                .patch(api::update_relationship)
                .delete(api::delete_relationship),
        )
        .route("/travel", get(api::get_travel).put(api::replace_travel))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
