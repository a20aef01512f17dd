//! Event endpoints
//!
//! Unexpected failures surface as a generic 500.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use waypoint_common::models::{Event, EventPatch, NewEvent};
use waypoint_common::{ids, time};

use super::{json_body, DeleteResponse};
use crate::db;
use crate::{ApiError, ApiResult, AppState};

/// GET /events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<Event>>> {
    let pool = state.events_db()?;
    let events = db::events::list(pool).await.map_err(ApiError::internal_db)?;
    Ok(Json(events))
}

/// GET /events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    let pool = state.events_db()?;
    db::events::get(pool, &id)
        .await
        .map_err(ApiError::internal_db)?
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let draft = json_body(payload)?.validate()?;
    let pool = state.events_db()?;

    let event = draft.into_event(ids::generate_uuid(), time::now());
    db::events::insert(pool, &event)
        .await
        .map_err(ApiError::internal_db)?;

    info!(event_id = %event.id, title = %event.title, "Created event");
    Ok((StatusCode::CREATED, Json(event)))
}

/// PATCH /events/:id
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventPatch>, JsonRejection>,
) -> ApiResult<Json<Event>> {
    let patch = json_body(payload)?;
    patch.validate()?;
    let pool = state.events_db()?;

    let mut event = db::events::get(pool, &id)
        .await
        .map_err(ApiError::internal_db)?
        .ok_or_else(|| not_found(&id))?;
    patch.apply_to(&mut event, time::now())?;

    if !db::events::update(pool, &event)
        .await
        .map_err(ApiError::internal_db)?
    {
        return Err(not_found(&id));
    }
    Ok(Json(event))
}

/// DELETE /events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let pool = state.events_db()?;
    if db::events::delete(pool, &id)
        .await
        .map_err(ApiError::internal_db)?
    {
        info!(event_id = %id, "Deleted event");
        Ok(DeleteResponse::ok())
    } else {
        Err(not_found(&id))
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Event not found: {}", id))
}
