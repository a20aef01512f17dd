//! Organizational events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{apply_optional, missing_fields_error, non_blank, patch, required, required_text};
use crate::geo::LatLng;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub city: String,
    pub country: String,
    pub coordinates: LatLng,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create input; every field optional so missing ones can be reported by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A validated [`NewEvent`] awaiting an id and timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub city: String,
    pub country: String,
    pub coordinates: LatLng,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub max_participants: Option<u32>,
    pub category: String,
    pub status: String,
}

impl NewEvent {
    /// Check required fields and date order
    pub fn validate(self) -> Result<EventDraft> {
        let mut missing = Vec::new();
        let title = required_text(self.title, "title", &mut missing);
        let description = required_text(self.description, "description", &mut missing);
        let city = required_text(self.city, "city", &mut missing);
        let country = required_text(self.country, "country", &mut missing);
        let coordinates = required(self.coordinates, "coordinates", &mut missing);
        let start_date = required(self.start_date, "startDate", &mut missing);
        let end_date = required(self.end_date, "endDate", &mut missing);
        let category = required_text(self.category, "category", &mut missing);
        let status = required_text(self.status, "status", &mut missing);
        missing_fields_error(missing)?;

        check_date_order(&start_date, &end_date)?;

        Ok(EventDraft {
            title,
            description,
            city,
            country,
            coordinates: coordinates.normalized(),
            start_date,
            end_date,
            image_url: non_blank(self.image_url),
            max_participants: self.max_participants,
            category,
            status,
        })
    }
}

impl EventDraft {
    pub fn into_event(self, id: String, now: DateTime<Utc>) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            city: self.city,
            country: self.country,
            coordinates: self.coordinates,
            start_date: self.start_date,
            end_date: self.end_date,
            image_url: self.image_url,
            max_participants: self.max_participants,
            category: self.category,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option", skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl EventPatch {
    /// Reject blank values for required fields
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("city", &self.city),
            ("country", &self.country),
            ("category", &self.category),
            ("status", &self.status),
        ] {
            if let Some(v) = value {
                required_text(Some(v.clone()), field, &mut missing);
            }
        }
        missing_fields_error(missing)
    }

    /// Whether the patch changes the canonical ordering key
    pub fn touches_order(&self) -> bool {
        self.start_date.is_some() || self.title.is_some()
    }

    /// Merge into an event, leaving unspecified fields untouched
    ///
    /// Fails without modifying the event when the result would end before it starts.
    pub fn apply_to(&self, event: &mut Event, now: DateTime<Utc>) -> Result<()> {
        let start = self.start_date.unwrap_or(event.start_date);
        let end = self.end_date.unwrap_or(event.end_date);
        check_date_order(&start, &end)?;

        if let Some(title) = &self.title {
            event.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            event.description = description.trim().to_string();
        }
        if let Some(city) = &self.city {
            event.city = city.trim().to_string();
        }
        if let Some(country) = &self.country {
            event.country = country.trim().to_string();
        }
        if let Some(coordinates) = self.coordinates {
            event.coordinates = coordinates.normalized();
        }
        event.start_date = start;
        event.end_date = end;
        apply_optional(&mut event.image_url, &self.image_url);
        apply_optional(&mut event.max_participants, &self.max_participants);
        if let Some(category) = &self.category {
            event.category = category.trim().to_string();
        }
        if let Some(status) = &self.status {
            event.status = status.trim().to_string();
        }
        event.updated_at = now;
        Ok(())
    }
}

fn check_date_order(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Result<()> {
    if end < start {
        return Err(Error::Validation(
            "endDate must not be before startDate".to_string(),
        ));
    }
    Ok(())
}
