//! Chronological ordering and year grouping
//!
//! Trip timelines are most-recent first and bucketed by year; event lists
//! are ascending by start date.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::cmp::Ordering;

use crate::models::{Event, TravelSnapshot, TravelStatus};
use crate::reference;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub country_id: String,
    pub name: String,
    pub flag: String,
    pub status: TravelStatus,
    pub date: Option<NaiveDate>,
    pub rating: Option<u8>,
    pub favorite: bool,
    pub location_count: usize,
}

/// Entries sharing a trip year; `year` is `None` for the undated bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineGroup {
    pub year: Option<i32>,
    pub entries: Vec<TimelineEntry>,
}

/// Build the year-bucketed trip timeline
///
/// A country appears when it counts as visited or its trip record carries a
/// date. Dated entries are newest first within descending years; undated
/// entries form a trailing group ordered by name.
pub fn build_timeline(snapshot: &TravelSnapshot) -> Vec<TimelineGroup> {
    let mut country_ids: Vec<&String> = snapshot
        .statuses
        .iter()
        .filter(|(_, status)| status.counts_as_visited())
        .map(|(id, _)| id)
        .collect();
    for (id, trip) in &snapshot.trips {
        if trip.date.is_some() && !country_ids.contains(&id) {
            country_ids.push(id);
        }
    }

    let mut entries: Vec<TimelineEntry> = country_ids
        .into_iter()
        .map(|id| {
            let trip = snapshot.trips.get(id);
            let country = reference::country(id);
            TimelineEntry {
                country_id: id.clone(),
                name: country.map(|c| c.name.to_string()).unwrap_or_else(|| id.clone()),
                flag: country.map(|c| c.flag.to_string()).unwrap_or_default(),
                status: snapshot.status_of(id),
                date: trip.and_then(|t| t.date),
                rating: trip.and_then(|t| t.rating),
                favorite: trip.map(|t| t.favorite).unwrap_or(false),
                location_count: trip.map(|t| t.locations.len()).unwrap_or(0),
            }
        })
        .collect();
    entries.sort_by(entry_order);

    let mut groups: Vec<TimelineGroup> = Vec::new();
    for entry in entries {
        let year = entry.date.map(|d| d.year());
        match groups.last_mut() {
            Some(group) if group.year == year => group.entries.push(entry),
            _ => groups.push(TimelineGroup {
                year,
                entries: vec![entry],
            }),
        }
    }
    groups
}

fn entry_order(a: &TimelineEntry, b: &TimelineEntry) -> Ordering {
    match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    }
}

/// Events: ascending start date, then title, then id
pub fn event_order(a: &Event, b: &Event) -> Ordering {
    a.start_date
        .cmp(&b.start_date)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_events(events: &mut [Event]) {
    events.sort_by(event_order);
}

/// Split events into upcoming (not yet ended) and past
///
/// Upcoming keeps canonical order; past is most recent first.
pub fn partition_events(events: &[Event], now: DateTime<Utc>) -> (Vec<Event>, Vec<Event>) {
    let (mut upcoming, mut past): (Vec<Event>, Vec<Event>) =
        events.iter().cloned().partition(|e| e.end_date >= now);
    sort_events(&mut upcoming);
    past.sort_by(|a, b| event_order(b, a));
    (upcoming, past)
}
