//! One-shot startup hydration from the remote service
//!
//! Each domain is fetched once. A successful fetch replaces the local store
//! wholesale; any failure leaves it exactly as it was. There is no merge and
//! no retry: edits made locally before a successful hydration resolves are
//! overwritten.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::FetchError;
use crate::remote::RemoteSource;
use crate::store::{Domain, EventStore, MemberStore, Shared, TravelStore};

/// What hydration did to one store
#[derive(Debug)]
pub enum HydrationOutcome {
    /// Local contents replaced by `count` fetched records
    Replaced { count: usize },
    /// Fetch failed; local contents kept
    Kept(FetchError),
    /// Fetched data could not be stored; local contents kept
    NotApplied(waypoint_common::Error),
}

impl HydrationOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, HydrationOutcome::Replaced { .. })
    }
}

impl fmt::Display for HydrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HydrationOutcome::Replaced { count } => write!(f, "replaced ({} records)", count),
            HydrationOutcome::Kept(e) => write!(f, "kept local state ({})", e),
            HydrationOutcome::NotApplied(e) => write!(f, "kept local state ({})", e),
        }
    }
}

/// Per-domain results of a full hydration pass
#[derive(Debug)]
pub struct HydrationReport {
    pub travel: HydrationOutcome,
    pub events: HydrationOutcome,
    pub members: HydrationOutcome,
}

impl HydrationReport {
    pub fn all_replaced(&self) -> bool {
        self.travel.is_replaced() && self.events.is_replaced() && self.members.is_replaced()
    }
}

pub struct HydrationReconciler {
    remote: Arc<dyn RemoteSource>,
}

impl HydrationReconciler {
    pub fn new(remote: Arc<dyn RemoteSource>) -> Self {
        Self { remote }
    }

    pub async fn hydrate_travel(&self, store: &Shared<TravelStore>) -> HydrationOutcome {
        match self.remote.fetch_travel().await {
            Ok(snapshot) => {
                let count = snapshot.statuses.len();
                let applied = store.write().await.replace_all(snapshot);
                settle(Domain::Travel, applied, count)
            }
            Err(e) => kept(Domain::Travel, e),
        }
    }

    pub async fn hydrate_events(&self, store: &Shared<EventStore>) -> HydrationOutcome {
        match self.remote.fetch_events().await {
            Ok(events) => {
                let count = events.len();
                let applied = store.write().await.replace_all(events);
                settle(Domain::Events, applied, count)
            }
            Err(e) => kept(Domain::Events, e),
        }
    }

    /// Members and relationships are fetched together and applied only if both succeed
    pub async fn hydrate_members(&self, store: &Shared<MemberStore>) -> HydrationOutcome {
        let fetched = tokio::try_join!(
            self.remote.fetch_members(),
            self.remote.fetch_relationships()
        );
        match fetched {
            Ok((members, relationships)) => {
                let count = members.len() + relationships.len();
                let applied = store.write().await.replace_all(members, relationships);
                settle(Domain::Members, applied, count)
            }
            Err(e) => kept(Domain::Members, e),
        }
    }

    /// Hydrate every domain concurrently; each succeeds or fails on its own
    pub async fn hydrate_all(
        &self,
        travel: &Shared<TravelStore>,
        events: &Shared<EventStore>,
        members: &Shared<MemberStore>,
    ) -> HydrationReport {
        let (travel, events, members) = tokio::join!(
            self.hydrate_travel(travel),
            self.hydrate_events(events),
            self.hydrate_members(members)
        );
        HydrationReport {
            travel,
            events,
            members,
        }
    }
}

fn settle(domain: Domain, applied: waypoint_common::Result<()>, count: usize) -> HydrationOutcome {
    match applied {
        Ok(()) => {
            info!(%domain, count, "Hydrated from remote");
            HydrationOutcome::Replaced { count }
        }
        Err(e) => {
            warn!(%domain, "Fetched remote state but could not store it: {}", e);
            HydrationOutcome::NotApplied(e)
        }
    }
}

fn kept(domain: Domain, reason: FetchError) -> HydrationOutcome {
    warn!(%domain, "Hydration failed, keeping local state: {}", reason);
    HydrationOutcome::Kept(reason)
}
