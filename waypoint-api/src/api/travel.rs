//! Travel state endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;
use waypoint_common::models::TravelSnapshot;

use super::json_body;
use crate::db;
use crate::{ApiError, ApiResult, AppState};

/// GET /travel
pub async fn get_travel(State(state): State<AppState>) -> ApiResult<Json<TravelSnapshot>> {
    let pool = state.events_db()?;
    let snapshot = db::travel::load(pool).await.map_err(ApiError::internal_db)?;
    Ok(Json(snapshot))
}

/// PUT /travel (full replacement)
pub async fn replace_travel(
    State(state): State<AppState>,
    payload: Result<Json<TravelSnapshot>, JsonRejection>,
) -> ApiResult<Json<TravelSnapshot>> {
    let snapshot = json_body(payload)?;
    snapshot.validate()?;
    let pool = state.events_db()?;

    db::travel::replace(pool, &snapshot)
        .await
        .map_err(ApiError::internal_db)?;

    info!(
        statuses = snapshot.statuses.len(),
        trips = snapshot.trips.len(),
        "Replaced travel state"
    );
    Ok(Json(snapshot))
}
