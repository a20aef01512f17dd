//! Local persisted stores and their change feed
//!
//! Stores are plain state containers: every mutation runs its
//! read-modify-write on the in-memory snapshot, re-applies canonical order,
//! writes the full document back to storage and announces itself on the
//! [`ChangeFeed`].

pub mod events;
pub mod members;
pub mod storage;
pub mod travel;

use std::fmt;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};
use waypoint_common::Result;

pub use events::EventStore;
pub use members::{take_reset_signal, MemberStore, MembersState, RESET_MEMBERS_PARAM};
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
pub use travel::TravelStore;

/// A store shared between the session and its hydration tasks
pub type Shared<T> = Arc<RwLock<T>>;

pub fn shared<T>(store: T) -> Shared<T> {
    Arc::new(RwLock::new(store))
}

/// Which store changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Travel,
    Events,
    Members,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Domain::Travel => "travel",
            Domain::Events => "events",
            Domain::Members => "members",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Local create/update/delete
    Mutated,
    /// Contents replaced by a successful hydration
    Hydrated,
    /// Local namespace cleared
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    pub domain: Domain,
    pub kind: ChangeKind,
}

/// Broadcast of store changes to any number of subscribers
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<StoreChange>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Receive every change emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.tx.subscribe()
    }

    /// Emit without caring whether anyone is listening
    pub fn emit(&self, domain: Domain, kind: ChangeKind) {
        if self.tx.send(StoreChange { domain, kind }).is_err() {
            debug!(%domain, ?kind, "No change subscribers");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Read a store document, starting empty when it is missing or unreadable
pub(crate) fn load_document<T>(storage: &dyn LocalStorage, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(content) = storage.load(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&content) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(key, "Discarding unreadable local state: {}", e);
            Ok(T::default())
        }
    }
}

pub(crate) fn save_document<T: Serialize>(storage: &dyn LocalStorage, key: &str, value: &T) -> Result<()> {
    let content = serde_json::to_string(value)?;
    storage.save(key, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_feed_delivers_to_subscribers() {
        let feed = ChangeFeed::new(8);
        let mut rx = feed.subscribe();
        assert_eq!(feed.subscriber_count(), 1);

        feed.emit(Domain::Events, ChangeKind::Hydrated);
        let change = rx.recv().await.unwrap();
        assert_eq!(change, StoreChange { domain: Domain::Events, kind: ChangeKind::Hydrated });
    }

    #[test]
    fn test_emit_without_subscribers_is_fine() {
        let feed = ChangeFeed::default();
        feed.emit(Domain::Travel, ChangeKind::Mutated);
    }

    #[test]
    fn test_unreadable_document_starts_empty() {
        let storage = MemoryStorage::new();
        storage.save("k", "{not json").unwrap();
        let value: Vec<String> = load_document(&storage, "k").unwrap();
        assert!(value.is_empty());
    }
}
