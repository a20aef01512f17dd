//! Domain models
//!
//! Entity records, their create inputs and their partial-update patches.
//! Patch types distinguish "field not supplied" from "field explicitly
//! cleared": an optional field is `Option<Option<T>>`, where the outer
//! `None` means absent and `Some(None)` means a JSON `null`.

pub mod event;
pub mod member;
pub mod travel;

pub use event::{Event, EventDraft, EventPatch, NewEvent};
pub use member::{
    Member, MemberDraft, MemberPatch, NewMember, NewRelationship, Relationship,
    RelationshipDraft, RelationshipPatch,
};
pub use travel::{
    LocationPatch, NewLocation, TravelLocation, TravelSnapshot, TravelStatus, TripData, TripPatch,
};

use crate::{Error, Result};

/// Serde helpers for tri-state patch fields
pub mod patch {
    use serde::{Deserialize, Deserializer};

    /// Deserialize a present field (including `null`) as `Some(..)`
    ///
    /// Pair with `#[serde(default)]` so an absent field stays `None`.
    pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// Apply a tri-state patch value to an optional field
pub(crate) fn apply_optional<T: Clone>(target: &mut Option<T>, patch: &Option<Option<T>>) {
    if let Some(value) = patch {
        *target = value.clone();
    }
}

/// Take a required string field, treating blank text as missing
pub(crate) fn required_text(value: Option<String>, field: &str, missing: &mut Vec<String>) -> String {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(field.to_string());
            String::new()
        }
    }
}

/// Take a required non-text field
pub(crate) fn required<T: Default>(value: Option<T>, field: &str, missing: &mut Vec<String>) -> T {
    match value {
        Some(v) => v,
        None => {
            missing.push(field.to_string());
            T::default()
        }
    }
}

pub(crate) fn missing_fields_error(missing: Vec<String>) -> Result<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Ratings are whole stars from 1 to 5
pub fn validate_rating(rating: Option<u8>) -> Result<()> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(Error::Validation(format!(
            "rating must be between 1 and 5, got {}",
            r
        ))),
        _ => Ok(()),
    }
}

/// Blank optional text is stored as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
