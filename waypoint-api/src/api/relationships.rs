//! Relationship endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use waypoint_common::models::{NewRelationship, Relationship, RelationshipPatch};
use waypoint_common::{ids, time};

use super::{json_body, DeleteResponse};
use crate::db;
use crate::{ApiError, ApiResult, AppState};

/// GET /relationships
pub async fn list_relationships(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Relationship>>> {
    let pool = state.members_db()?;
    let relationships = db::relationships::list(pool)
        .await
        .map_err(ApiError::store_db)?;
    Ok(Json(relationships))
}

/// GET /relationships/:id
pub async fn get_relationship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Relationship>> {
    let pool = state.members_db()?;
    db::relationships::get(pool, &id)
        .await
        .map_err(ApiError::store_db)?
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// POST /relationships
///
/// Rejects self-relationships and endpoints that are not known members.
pub async fn create_relationship(
    State(state): State<AppState>,
    payload: Result<Json<NewRelationship>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Relationship>)> {
    let draft = json_body(payload)?.validate()?;
    let pool = state.members_db()?;

    for member_id in [&draft.from_member_id, &draft.to_member_id] {
        if !db::members::exists(pool, member_id)
            .await
            .map_err(ApiError::store_db)?
        {
            return Err(ApiError::BadRequest(format!("Unknown member: {}", member_id)));
        }
    }

    let relationship = draft.into_relationship(ids::generate_uuid(), time::now());
    db::relationships::insert(pool, &relationship)
        .await
        .map_err(ApiError::store_db)?;

    info!(
        relationship_id = %relationship.id,
        kind = %relationship.relationship_type,
        "Created relationship"
    );
    Ok((StatusCode::CREATED, Json(relationship)))
}

/// PATCH /relationships/:id
pub async fn update_relationship(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RelationshipPatch>, JsonRejection>,
) -> ApiResult<Json<Relationship>> {
    let patch = json_body(payload)?;
    patch.validate()?;
    let pool = state.members_db()?;

    let mut relationship = db::relationships::get(pool, &id)
        .await
        .map_err(ApiError::store_db)?
        .ok_or_else(|| not_found(&id))?;
    patch.apply_to(&mut relationship, time::now());

    if !db::relationships::update(pool, &relationship)
        .await
        .map_err(ApiError::store_db)?
    {
        return Err(not_found(&id));
    }
    Ok(Json(relationship))
}

/// DELETE /relationships/:id
pub async fn delete_relationship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let pool = state.members_db()?;
    if db::relationships::delete(pool, &id)
        .await
        .map_err(ApiError::store_db)?
    {
        Ok(DeleteResponse::ok())
    } else {
        Err(not_found(&id))
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Relationship not found: {}", id))
}
