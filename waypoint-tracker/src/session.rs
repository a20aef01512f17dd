//! A tracker session: the three stores, their change feed and hydration

use std::sync::Arc;

use reqwest::Url;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;
use waypoint_common::achievements::UnlockTracker;
use waypoint_common::reference::Achievement;
use waypoint_common::Result;

use crate::hydration::{HydrationReconciler, HydrationReport};
use crate::remote::RemoteSource;
use crate::store::{
    shared, take_reset_signal, ChangeFeed, EventStore, LocalStorage, MemberStore, Shared,
    TravelStore,
};

/// Stores constructed once per session and passed around explicitly
pub struct Session {
    travel: Shared<TravelStore>,
    events: Shared<EventStore>,
    members: Shared<MemberStore>,
    feed: ChangeFeed,
    reconciler: Arc<HydrationReconciler>,
    unlocks: Mutex<UnlockTracker>,
}

impl Session {
    /// Load all stores from local storage
    pub fn open(storage: Arc<dyn LocalStorage>, remote: Arc<dyn RemoteSource>) -> Result<Self> {
        let feed = ChangeFeed::default();
        let travel = TravelStore::open(storage.clone(), feed.clone())?;
        let events = EventStore::open(storage.clone(), feed.clone())?;
        let members = MemberStore::open(storage, feed.clone())?;

        Ok(Self {
            travel: shared(travel),
            events: shared(events),
            members: shared(members),
            feed,
            reconciler: Arc::new(HydrationReconciler::new(remote)),
            unlocks: Mutex::new(UnlockTracker::new()),
        })
    }

    pub fn travel(&self) -> &Shared<TravelStore> {
        &self.travel
    }

    pub fn events(&self) -> &Shared<EventStore> {
        &self.events
    }

    pub fn members(&self) -> &Shared<MemberStore> {
        &self.members
    }

    pub fn feed(&self) -> &ChangeFeed {
        &self.feed
    }

    /// Clear local members state
    pub async fn reset_members(&self) -> Result<()> {
        self.members.write().await.reset()
    }

    /// Honour a `resetMembers` launch parameter, scrubbing it from the URL
    ///
    /// Must run before hydration starts.
    pub async fn apply_launch_url(&self, url: &mut Url) -> Result<bool> {
        if !take_reset_signal(url) {
            return Ok(false);
        }
        info!("Launch URL requested a members reset");
        self.reset_members().await?;
        Ok(true)
    }

    /// Start hydration in the background
    ///
    /// Local mutations stay available while it runs; a successful fetch
    /// overwrites whatever they did.
    pub fn start_hydration(&self) -> JoinHandle<HydrationReport> {
        let reconciler = self.reconciler.clone();
        let travel = self.travel.clone();
        let events = self.events.clone();
        let members = self.members.clone();
        tokio::spawn(async move { reconciler.hydrate_all(&travel, &events, &members).await })
    }

    /// Hydrate every domain and wait for the result
    pub async fn hydrate(&self) -> HydrationReport {
        self.reconciler
            .hydrate_all(&self.travel, &self.events, &self.members)
            .await
    }

    /// Achievements unlocked since the previous call
    ///
    /// The first call only records what is already unlocked.
    pub async fn newly_unlocked(&self) -> Vec<&'static Achievement> {
        let unlocked = self.travel.read().await.unlocked_achievements();
        self.unlocks.lock().await.observe(&unlocked)
    }
}
