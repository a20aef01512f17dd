//! HTTP API handlers for waypoint-api

pub mod events;
pub mod health;
pub mod members;
pub mod relationships;
pub mod travel;

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;

use crate::ApiResult;

pub use events::{create_event, delete_event, get_event, list_events, update_event};
pub use health::health_routes;
pub use members::{create_member, delete_member, get_member, list_members, update_member};
pub use relationships::{
    create_relationship, delete_relationship, get_relationship, list_relationships,
    update_relationship,
};
pub use travel::{get_travel, replace_travel};

/// Body of a successful DELETE
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Unwrap a JSON body, reporting malformed input as 400
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    let Json(value) = payload?;
    Ok(value)
}
