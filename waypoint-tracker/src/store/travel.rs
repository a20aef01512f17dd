//! Travel store: per-country status map plus trip records

use std::sync::Arc;

use tracing::debug;
use waypoint_common::achievements::unlocked_for_stats;
use waypoint_common::models::{
    LocationPatch, NewLocation, TravelLocation, TravelSnapshot, TravelStatus, TripData, TripPatch,
};
use waypoint_common::reference::{self, Achievement};
use waypoint_common::stats::{compute_stats, Stats};
use waypoint_common::timeline::{build_timeline, TimelineGroup};
use waypoint_common::{ids, Result};

use super::storage::{LocalStorage, TRAVEL_KEY};
use super::{load_document, save_document, ChangeFeed, ChangeKind, Domain};

pub struct TravelStore {
    storage: Arc<dyn LocalStorage>,
    feed: ChangeFeed,
    state: TravelSnapshot,
}

impl TravelStore {
    /// Load the persisted travel state (empty when none is stored)
    pub fn open(storage: Arc<dyn LocalStorage>, feed: ChangeFeed) -> Result<Self> {
        let state = load_document(storage.as_ref(), TRAVEL_KEY)?;
        Ok(Self { storage, feed, state })
    }

    pub fn snapshot(&self) -> &TravelSnapshot {
        &self.state
    }

    pub fn status_of(&self, country_id: &str) -> TravelStatus {
        self.state.status_of(country_id)
    }

    pub fn trip(&self, country_id: &str) -> Option<&TripData> {
        self.state.trips.get(country_id)
    }

    /// Record a status; `None` is stored explicitly rather than removing the key
    pub fn set_status(&mut self, country_id: &str, status: TravelStatus) -> Result<()> {
        if reference::country(country_id).is_none() {
            debug!(country_id, "Status set for a country outside the reference dataset");
        }
        let mut next = self.state.clone();
        next.statuses.insert(country_id.to_string(), status);
        self.commit(next)
    }

    /// Merge a patch into the country's trip record, creating it if needed
    ///
    /// A record left with no content is dropped.
    pub fn update_trip(&mut self, country_id: &str, patch: &TripPatch) -> Result<TripData> {
        patch.validate()?;
        let mut next = self.state.clone();
        let trip = next.trips.entry(country_id.to_string()).or_default();
        patch.apply_to(trip);
        let result = trip.clone();
        if result.is_empty() {
            next.trips.remove(country_id);
        }
        self.commit(next)?;
        Ok(result)
    }

    /// Flip the trip's favourite flag, returning the new value
    pub fn toggle_favorite(&mut self, country_id: &str) -> Result<bool> {
        let current = self.trip(country_id).map(|t| t.favorite).unwrap_or(false);
        let patch = TripPatch {
            favorite: Some(!current),
            ..Default::default()
        };
        self.update_trip(country_id, &patch).map(|trip| trip.favorite)
    }

    pub fn add_location(&mut self, country_id: &str, input: NewLocation) -> Result<TravelLocation> {
        let mut id = ids::generate("loc");
        while self.trip(country_id).and_then(|t| t.location(&id)).is_some() {
            id = ids::generate("loc");
        }
        let location = input.into_location(id)?;

        let mut next = self.state.clone();
        next.trips
            .entry(country_id.to_string())
            .or_default()
            .locations
            .push(location.clone());
        self.commit(next)?;
        Ok(location)
    }

    /// Update a location; unknown country or location is a no-op (`None`)
    pub fn update_location(
        &mut self,
        country_id: &str,
        location_id: &str,
        patch: &LocationPatch,
    ) -> Result<Option<TravelLocation>> {
        patch.validate()?;
        let mut next = self.state.clone();
        let Some(location) = next
            .trips
            .get_mut(country_id)
            .and_then(|trip| trip.locations.iter_mut().find(|l| l.id == location_id))
        else {
            return Ok(None);
        };
        patch.apply_to(location);
        let updated = location.clone();
        self.commit(next)?;
        Ok(Some(updated))
    }

    /// Remove a location, returning whether anything was removed
    pub fn remove_location(&mut self, country_id: &str, location_id: &str) -> Result<bool> {
        if self
            .trip(country_id)
            .and_then(|t| t.location(location_id))
            .is_none()
        {
            return Ok(false);
        }
        let mut next = self.state.clone();
        if let Some(trip) = next.trips.get_mut(country_id) {
            trip.locations.retain(|l| l.id != location_id);
            if trip.is_empty() {
                next.trips.remove(country_id);
            }
        }
        self.commit(next)?;
        Ok(true)
    }

    pub fn stats(&self) -> Stats {
        compute_stats(&self.state.statuses)
    }

    pub fn unlocked_achievements(&self) -> Vec<&'static Achievement> {
        unlocked_for_stats(&self.stats())
    }

    pub fn timeline(&self) -> Vec<TimelineGroup> {
        build_timeline(&self.state)
    }

    /// Overwrite everything with a fetched snapshot
    ///
    /// Nothing changes, in memory or on disk, unless the write succeeds.
    pub fn replace_all(&mut self, snapshot: TravelSnapshot) -> Result<()> {
        snapshot.validate()?;
        save_document(self.storage.as_ref(), TRAVEL_KEY, &snapshot)?;
        self.state = snapshot;
        self.feed.emit(Domain::Travel, ChangeKind::Hydrated);
        Ok(())
    }

    /// Persist `next`, then make it current; a failed save changes nothing
    fn commit(&mut self, next: TravelSnapshot) -> Result<()> {
        save_document(self.storage.as_ref(), TRAVEL_KEY, &next)?;
        self.state = next;
        self.feed.emit(Domain::Travel, ChangeKind::Mutated);
        Ok(())
    }
}
