//! Travel status and trip records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{apply_optional, missing_fields_error, non_blank, patch, required_text, validate_rating};
use crate::geo::LatLng;
use crate::Result;

/// Per-country travel state
///
/// `None` is a first-class value: an explicitly cleared country is stored as
/// `None` rather than removed, so "never set" and "cleared" stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStatus {
    Visited,
    BucketList,
    Lived,
    #[default]
    None,
}

impl TravelStatus {
    /// Visited and lived both count towards visited totals
    pub fn counts_as_visited(self) -> bool {
        matches!(self, TravelStatus::Visited | TravelStatus::Lived)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TravelStatus::Visited => "visited",
            TravelStatus::BucketList => "bucket-list",
            TravelStatus::Lived => "lived",
            TravelStatus::None => "none",
        }
    }
}

impl std::str::FromStr for TravelStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visited" => Ok(TravelStatus::Visited),
            "bucket-list" | "bucketlist" | "bucket_list" => Ok(TravelStatus::BucketList),
            "lived" => Ok(TravelStatus::Lived),
            "none" | "" => Ok(TravelStatus::None),
            other => Err(crate::Error::Validation(format!(
                "unknown travel status '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for TravelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place visited within a country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelLocation {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
}

/// Optional per-country trip record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub locations: Vec<TravelLocation>,
}

impl TripData {
    pub fn location(&self, id: &str) -> Option<&TravelLocation> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        *self == TripData::default()
    }
}

/// Partial update of a trip record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPatch {
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub rating: Option<Option<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl TripPatch {
    pub fn validate(&self) -> Result<()> {
        validate_rating(self.rating.flatten())
    }

    pub fn apply_to(&self, trip: &mut TripData) {
        apply_optional(&mut trip.date, &self.date);
        apply_optional(&mut trip.notes, &self.notes);
        apply_optional(&mut trip.rating, &self.rating);
        if let Some(photos) = &self.photos {
            trip.photos = photos.clone();
        }
        if let Some(favorite) = self.favorite {
            trip.favorite = favorite;
        }
    }
}

/// Input for adding a location to a trip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub name: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub rating: Option<u8>,
    #[serde(default)]
    pub favorite: bool,
    pub coordinates: Option<LatLng>,
}

impl NewLocation {
    pub fn named(name: &str, category: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    /// Validate and build the location with the given id
    pub fn into_location(self, id: String) -> Result<TravelLocation> {
        let mut missing = Vec::new();
        let name = required_text(self.name, "name", &mut missing);
        let category = required_text(self.category, "category", &mut missing);
        missing_fields_error(missing)?;
        validate_rating(self.rating)?;

        Ok(TravelLocation {
            id,
            name,
            category,
            date: self.date,
            notes: non_blank(self.notes),
            rating: self.rating,
            favorite: self.favorite,
            coordinates: self.coordinates.map(LatLng::normalized),
        })
    }
}

/// Partial update of a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub rating: Option<Option<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Option<LatLng>>,
}

impl LocationPatch {
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if let Some(name) = &self.name {
            required_text(Some(name.clone()), "name", &mut missing);
        }
        if let Some(category) = &self.category {
            required_text(Some(category.clone()), "category", &mut missing);
        }
        missing_fields_error(missing)?;
        validate_rating(self.rating.flatten())
    }

    pub fn apply_to(&self, location: &mut TravelLocation) {
        if let Some(name) = &self.name {
            location.name = name.trim().to_string();
        }
        if let Some(category) = &self.category {
            location.category = category.trim().to_string();
        }
        apply_optional(&mut location.date, &self.date);
        apply_optional(&mut location.notes, &self.notes);
        apply_optional(&mut location.rating, &self.rating);
        if let Some(favorite) = self.favorite {
            location.favorite = favorite;
        }
        if let Some(coordinates) = &self.coordinates {
            location.coordinates = coordinates.map(LatLng::normalized);
        }
    }
}

/// Full travel state: the status map plus trip records
///
/// This is both the durable local shape and the remote `/travel` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelSnapshot {
    #[serde(default)]
    pub statuses: BTreeMap<String, TravelStatus>,
    #[serde(default)]
    pub trips: BTreeMap<String, TripData>,
}

impl TravelSnapshot {
    pub fn status_of(&self, country_id: &str) -> TravelStatus {
        self.statuses.get(country_id).copied().unwrap_or_default()
    }

    /// Check every trip and location rating in the snapshot
    pub fn validate(&self) -> Result<()> {
        for trip in self.trips.values() {
            validate_rating(trip.rating)?;
            for location in &trip.locations {
                validate_rating(location.rating)?;
            }
        }
        Ok(())
    }
}
