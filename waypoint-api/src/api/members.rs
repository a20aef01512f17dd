//! Member endpoints
//!
//! A missing or unreachable store answers 503.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use waypoint_common::models::{Member, MemberPatch, NewMember};
use waypoint_common::{ids, time};

use super::{json_body, DeleteResponse};
use crate::db;
use crate::{ApiError, ApiResult, AppState};

/// GET /members
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<Member>>> {
    let pool = state.members_db()?;
    let members = db::members::list(pool).await.map_err(ApiError::store_db)?;
    Ok(Json(members))
}

/// GET /members/:id
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Member>> {
    let pool = state.members_db()?;
    db::members::get(pool, &id)
        .await
        .map_err(ApiError::store_db)?
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// POST /members
pub async fn create_member(
    State(state): State<AppState>,
    payload: Result<Json<NewMember>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Member>)> {
    let draft = json_body(payload)?.validate()?;
    let pool = state.members_db()?;

    let member = draft.into_member(ids::generate_uuid(), time::now());
    db::members::insert(pool, &member)
        .await
        .map_err(ApiError::store_db)?;

    info!(member_id = %member.id, "Created member");
    Ok((StatusCode::CREATED, Json(member)))
}

/// PATCH /members/:id
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MemberPatch>, JsonRejection>,
) -> ApiResult<Json<Member>> {
    let patch = json_body(payload)?;
    patch.validate()?;
    let pool = state.members_db()?;

    let mut member = db::members::get(pool, &id)
        .await
        .map_err(ApiError::store_db)?
        .ok_or_else(|| not_found(&id))?;
    patch.apply_to(&mut member, time::now());

    if !db::members::update(pool, &member)
        .await
        .map_err(ApiError::store_db)?
    {
        return Err(not_found(&id));
    }
    Ok(Json(member))
}

/// DELETE /members/:id (removes the member's relationships too)
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let pool = state.members_db()?;
    if db::members::delete(pool, &id)
        .await
        .map_err(ApiError::store_db)?
    {
        info!(member_id = %id, "Deleted member");
        Ok(DeleteResponse::ok())
    } else {
        Err(not_found(&id))
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Member not found: {}", id))
}
