//! Events store, kept in ascending start order

use std::sync::Arc;

use chrono::{DateTime, Utc};
use waypoint_common::models::{Event, EventPatch, NewEvent};
use waypoint_common::timeline::{partition_events, sort_events};
use waypoint_common::{ids, time, Result};

use super::storage::{LocalStorage, EVENTS_KEY};
use super::{load_document, save_document, ChangeFeed, ChangeKind, Domain};

pub struct EventStore {
    storage: Arc<dyn LocalStorage>,
    feed: ChangeFeed,
    events: Vec<Event>,
}

impl EventStore {
    pub fn open(storage: Arc<dyn LocalStorage>, feed: ChangeFeed) -> Result<Self> {
        let mut events: Vec<Event> = load_document(storage.as_ref(), EVENTS_KEY)?;
        sort_events(&mut events);
        Ok(Self {
            storage,
            feed,
            events,
        })
    }

    /// All events, ascending by start date
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Upcoming (not yet ended) and past events relative to `now`
    pub fn partition(&self, now: DateTime<Utc>) -> (Vec<Event>, Vec<Event>) {
        partition_events(&self.events, now)
    }

    pub fn create(&mut self, input: NewEvent) -> Result<Event> {
        let event = input.validate()?.into_event(ids::generate("evt"), time::now());
        let mut next = self.events.clone();
        next.push(event.clone());
        sort_events(&mut next);
        self.commit(next)?;
        Ok(event)
    }

    /// Merge a patch into an event; an unknown id is a no-op (`None`)
    pub fn update(&mut self, id: &str, patch: &EventPatch) -> Result<Option<Event>> {
        patch.validate()?;
        let mut next = self.events.clone();
        let Some(event) = next.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        patch.apply_to(event, time::now())?;
        let updated = event.clone();
        if patch.touches_order() {
            sort_events(&mut next);
        }
        self.commit(next)?;
        Ok(Some(updated))
    }

    /// Remove an event, returning whether it existed
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let next = self.events.iter().filter(|e| e.id != id).cloned().collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Overwrite the whole collection with fetched events
    pub fn replace_all(&mut self, mut events: Vec<Event>) -> Result<()> {
        sort_events(&mut events);
        save_document(self.storage.as_ref(), EVENTS_KEY, &events)?;
        self.events = events;
        self.feed.emit(Domain::Events, ChangeKind::Hydrated);
        Ok(())
    }

    /// Persist `next`, then make it current; a failed save changes nothing
    fn commit(&mut self, next: Vec<Event>) -> Result<()> {
        save_document(self.storage.as_ref(), EVENTS_KEY, &next)?;
        self.events = next;
        self.feed.emit(Domain::Events, ChangeKind::Mutated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;
    use chrono::{Duration, TimeZone};
    use waypoint_common::LatLng;

    fn store() -> EventStore {
        EventStore::open(Arc::new(MemoryStorage::new()), ChangeFeed::default()).unwrap()
    }

    fn input(title: &str, start: DateTime<Utc>) -> NewEvent {
        NewEvent {
            title: Some(title.into()),
            description: Some("Monthly meetup".into()),
            city: Some("Berlin".into()),
            country: Some("Germany".into()),
            coordinates: Some(LatLng(52.52, 13.40)),
            start_date: Some(start),
            end_date: Some(start + Duration::hours(2)),
            category: Some("meetup".into()),
            status: Some("planned".into()),
            ..Default::default()
        }
    }

    fn assert_start_order(store: &EventStore) {
        assert!(store
            .list()
            .windows(2)
            .all(|w| w[0].start_date <= w[1].start_date));
    }

    #[test]
    fn test_create_keeps_start_order() {
        let mut store = store();
        let t = Utc.with_ymd_and_hms(2025, 4, 1, 18, 0, 0).unwrap();
        store.create(input("Third", t + Duration::days(20))).unwrap();
        store.create(input("First", t)).unwrap();
        store.create(input("Second", t + Duration::days(3))).unwrap();

        let titles: Vec<&str> = store.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_order_holds_after_updates_and_deletes() {
        let mut store = store();
        let t = Utc.with_ymd_and_hms(2025, 4, 1, 18, 0, 0).unwrap();
        let a = store.create(input("A", t)).unwrap();
        let b = store.create(input("B", t + Duration::days(1))).unwrap();
        store.create(input("C", t + Duration::days(2))).unwrap();

        let patch = EventPatch {
            start_date: Some(t + Duration::days(5)),
            end_date: Some(t + Duration::days(5) + Duration::hours(1)),
            ..Default::default()
        };
        store.update(&a.id, &patch).unwrap().unwrap();
        assert_start_order(&store);
        assert_eq!(store.list().last().unwrap().id, a.id);

        assert!(store.delete(&b.id).unwrap());
        assert_start_order(&store);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut store = store();
        let err = store.create(NewEvent::default()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("title"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_unknown_id_is_tolerated() {
        let mut store = store();
        assert!(store.update("nope", &EventPatch::default()).unwrap().is_none());
        assert!(!store.delete("nope").unwrap());
    }

    #[test]
    fn test_patch_null_clears_image_url() {
        let mut store = store();
        let t = Utc.with_ymd_and_hms(2025, 4, 1, 18, 0, 0).unwrap();
        let mut with_image = input("Photo walk", t);
        with_image.image_url = Some("https://img.example/a.jpg".into());
        let event = store.create(with_image).unwrap();

        let keep: EventPatch = serde_json::from_str(r#"{"title": "Photo walk II"}"#).unwrap();
        let updated = store.update(&event.id, &keep).unwrap().unwrap();
        assert_eq!(updated.image_url.as_deref(), Some("https://img.example/a.jpg"));

        let clear: EventPatch = serde_json::from_str(r#"{"imageUrl": null}"#).unwrap();
        let updated = store.update(&event.id, &clear).unwrap().unwrap();
        assert_eq!(updated.image_url, None);
        assert_eq!(updated.title, "Photo walk II");
    }

    #[test]
    fn test_failed_save_leaves_events_unchanged() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = EventStore::open(storage.clone(), ChangeFeed::default()).unwrap();
        let t = Utc.with_ymd_and_hms(2025, 4, 1, 18, 0, 0).unwrap();
        let kept = store.create(input("Kept", t)).unwrap();

        storage.refuse_writes(true);
        assert!(store.create(input("Lost", t + Duration::days(1))).is_err());
        let rename = EventPatch {
            title: Some("Renamed".into()),
            ..Default::default()
        };
        assert!(store.update(&kept.id, &rename).is_err());
        assert!(store.delete(&kept.id).is_err());

        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].title, "Kept");

        // A later successful save must not carry the refused mutations
        storage.refuse_writes(false);
        store.create(input("Next", t + Duration::days(2))).unwrap();
        let reopened = EventStore::open(storage, ChangeFeed::default()).unwrap();
        let titles: Vec<&str> = reopened.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Kept", "Next"]);
    }

    #[test]
    fn test_reopen_restores_events() {
        let storage = Arc::new(MemoryStorage::new());
        let t = Utc.with_ymd_and_hms(2025, 4, 1, 18, 0, 0).unwrap();
        {
            let mut store = EventStore::open(storage.clone(), ChangeFeed::default()).unwrap();
            store.create(input("Kept", t)).unwrap();
        }
        let store = EventStore::open(storage, ChangeFeed::default()).unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].title, "Kept");
    }
}
