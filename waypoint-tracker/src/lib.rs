//! waypoint-tracker - local-first travel tracker
//!
//! Keeps travel state, events and members in durable local stores that stay
//! usable offline. At session start each domain is hydrated once from the
//! remote service: a successful fetch replaces the local contents, a failed
//! one leaves them untouched.

pub mod error;
pub mod hydration;
pub mod remote;
pub mod session;
pub mod store;

pub use error::{FetchError, RemoteError};
pub use hydration::{HydrationOutcome, HydrationReconciler, HydrationReport};
pub use remote::{HttpRemote, RemoteSource};
pub use session::Session;
pub use store::{ChangeFeed, ChangeKind, Domain, EventStore, MemberStore, StoreChange, TravelStore};
