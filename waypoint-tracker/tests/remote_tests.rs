//! HttpRemote against a real waypoint-api router on an ephemeral port

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;
use waypoint_api::{build_router, db, AppState};
use waypoint_common::models::{
    EventPatch, NewEvent, NewMember, NewRelationship, RelationshipPatch, TravelSnapshot, TravelStatus,
};
use waypoint_common::LatLng;
use waypoint_tracker::store::storage::{EVENTS_KEY, MEMBERS_KEY, TRAVEL_KEY};
use waypoint_tracker::store::{LocalStorage, MemoryStorage};
use waypoint_tracker::{FetchError, HttpRemote, HydrationOutcome, RemoteError, RemoteSource, Session};

/// Serve the router in the background and return its base URL
async fn serve(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_api() -> (HttpRemote, TempDir) {
    let dir = TempDir::new().unwrap();
    let pool = db::init_database(&dir.path().join("waypoint.db")).await.unwrap();
    let base_url = serve(AppState::new(pool)).await;
    (HttpRemote::new(&base_url).unwrap(), dir)
}

fn new_event(title: &str, days: i64) -> NewEvent {
    let start = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap() + Duration::days(days);
    NewEvent {
        title: Some(title.into()),
        description: Some("Field trip".into()),
        city: Some("Reykjavik".into()),
        country: Some("Iceland".into()),
        coordinates: Some(LatLng(64.15, -21.94)),
        start_date: Some(start),
        end_date: Some(start + Duration::hours(4)),
        category: Some("trip".into()),
        status: Some("planned".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_event_round_trip_through_http() {
    let (remote, _dir) = spawn_api().await;

    remote.create_event(&new_event("Later", 10)).await.unwrap();
    let early = remote.create_event(&new_event("Sooner", 1)).await.unwrap();

    let events = remote.fetch_events().await.unwrap();
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Sooner", "Later"]);

    let patch = EventPatch {
        title: Some("Sooner still".into()),
        ..Default::default()
    };
    let updated = remote.update_event(&early.id, &patch).await.unwrap();
    assert_eq!(updated.title, "Sooner still");
    assert_eq!(remote.get_event(&early.id).await.unwrap().title, "Sooner still");

    remote.delete_event(&early.id).await.unwrap();
    let err = remote.delete_event(&early.id).await.unwrap_err();
    assert!(matches!(err, RemoteError::NotFound(_)));
}

#[tokio::test]
async fn test_rejections_are_classified() {
    let (remote, _dir) = spawn_api().await;

    let err = remote.create_event(&NewEvent::default()).await.unwrap_err();
    match err {
        RemoteError::Validation(message) => assert!(message.contains("title")),
        other => panic!("expected validation error, got {other:?}"),
    }

    let ada = remote.create_member(&NewMember::named("Ada", "Lovelace")).await.unwrap();
    let err = remote
        .create_relationship(&NewRelationship::between(&ada.id, &ada.id, "friend"))
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Validation(_)));

    let err = remote.get_event("missing").await.unwrap_err();
    assert!(matches!(err, RemoteError::NotFound(_)));
}

#[tokio::test]
async fn test_members_and_relationships_over_http() {
    let (remote, _dir) = spawn_api().await;
    let ada = remote.create_member(&NewMember::named("Ada", "Lovelace")).await.unwrap();
    let charles = remote.create_member(&NewMember::named("Charles", "Babbage")).await.unwrap();

    let link = remote
        .create_relationship(&NewRelationship::between(&ada.id, &charles.id, "colleague"))
        .await
        .unwrap();
    assert_eq!(link.relationship_type, "colleague");

    let members = remote.fetch_members().await.unwrap();
    let last_names: Vec<&str> = members.iter().map(|m| m.last_name.as_str()).collect();
    assert_eq!(last_names, vec!["Babbage", "Lovelace"]);
    assert_eq!(remote.fetch_relationships().await.unwrap().len(), 1);

    let patch: RelationshipPatch =
        serde_json::from_str(r#"{"type": "mentor", "description": "Analytical Engine notes"}"#)
            .unwrap();
    let updated = remote.update_relationship(&link.id, &patch).await.unwrap();
    assert_eq!(updated.id, link.id);
    assert_eq!(updated.relationship_type, "mentor");
    assert_eq!(updated.description.as_deref(), Some("Analytical Engine notes"));

    let err = remote.update_relationship("missing", &patch).await.unwrap_err();
    assert!(matches!(err, RemoteError::NotFound(_)));

    remote.delete_relationship(&link.id).await.unwrap();
    remote.delete_member(&ada.id).await.unwrap();
    assert_eq!(remote.fetch_members().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_travel_push_then_fetch() {
    let (remote, _dir) = spawn_api().await;
    let mut snapshot = TravelSnapshot::default();
    snapshot.statuses.insert("NZ".into(), TravelStatus::Visited);
    snapshot.statuses.insert("IS".into(), TravelStatus::BucketList);

    remote.push_travel(&snapshot).await.unwrap();
    assert_eq!(remote.fetch_travel().await.unwrap(), snapshot);
}

#[tokio::test]
async fn test_unconfigured_store_reports_unavailable() {
    let base_url = serve(AppState::unconfigured()).await;
    let remote = HttpRemote::new(&base_url).unwrap();

    let err = remote.fetch_members().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));

    let err = remote.create_member(&NewMember::named("Ada", "Lovelace")).await.unwrap_err();
    assert!(matches!(err, RemoteError::Unavailable(_)));
}

#[tokio::test]
async fn test_session_hydrates_from_live_service() {
    let (remote, _dir) = spawn_api().await;
    remote.create_event(&new_event("Remote B", 2)).await.unwrap();
    remote.create_event(&new_event("Remote C", 5)).await.unwrap();

    let session = Session::open(Arc::new(MemoryStorage::new()), Arc::new(remote)).unwrap();
    session
        .events()
        .write()
        .await
        .create(new_event("Local A", 0))
        .unwrap();

    let report = session.hydrate().await;
    assert!(report.all_replaced(), "{report:?}");

    let titles: Vec<String> = session
        .events()
        .read()
        .await
        .list()
        .iter()
        .map(|e| e.title.clone())
        .collect();
    assert_eq!(titles, vec!["Remote B", "Remote C"]);
}

#[tokio::test]
async fn test_session_keeps_local_state_when_service_is_down() {
    // Reserve a port, then free it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let remote = HttpRemote::new(&format!("http://127.0.0.1:{}", port)).unwrap();

    let session = Session::open(Arc::new(MemoryStorage::new()), Arc::new(remote)).unwrap();
    session
        .travel()
        .write()
        .await
        .set_status("CL", TravelStatus::Visited)
        .unwrap();

    let report = session.hydrate().await;
    assert!(matches!(report.travel, HydrationOutcome::Kept(FetchError::Network(_))));
    assert_eq!(session.travel().read().await.status_of("CL"), TravelStatus::Visited);
}

#[tokio::test]
async fn test_session_keeps_local_state_on_undecodable_payloads() {
    // 200 responses whose bodies are not the expected documents
    let garbled = Router::new()
        .route("/travel", get(|| async { "not json" }))
        .route("/events", get(|| async { Json(serde_json::json!({"events": []})) }))
        .route("/members", get(|| async { Json(serde_json::json!([{"id": 3}])) }))
        .route("/relationships", get(|| async { Json(serde_json::json!([])) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, garbled).await.unwrap();
    });
    let remote = HttpRemote::new(&format!("http://{}", addr)).unwrap();

    let storage = Arc::new(MemoryStorage::new());
    let session = Session::open(storage.clone(), Arc::new(remote)).unwrap();
    session
        .travel()
        .write()
        .await
        .set_status("PE", TravelStatus::Visited)
        .unwrap();
    session
        .events()
        .write()
        .await
        .create(new_event("Local A", 0))
        .unwrap();
    session
        .members()
        .write()
        .await
        .create_member(NewMember::named("Ada", "Lovelace"))
        .unwrap();
    let stored = |key: &str| storage.load(key).unwrap();
    let before = [stored(TRAVEL_KEY), stored(EVENTS_KEY), stored(MEMBERS_KEY)];

    let report = session.hydrate().await;
    assert!(matches!(report.travel, HydrationOutcome::Kept(FetchError::Parse(_))), "{report:?}");
    assert!(matches!(report.events, HydrationOutcome::Kept(FetchError::Parse(_))), "{report:?}");
    assert!(matches!(report.members, HydrationOutcome::Kept(FetchError::Parse(_))), "{report:?}");

    assert_eq!([stored(TRAVEL_KEY), stored(EVENTS_KEY), stored(MEMBERS_KEY)], before);
    assert_eq!(session.travel().read().await.status_of("PE"), TravelStatus::Visited);
    assert_eq!(session.events().read().await.list().len(), 1);
    assert_eq!(session.members().read().await.members().len(), 1);
}
