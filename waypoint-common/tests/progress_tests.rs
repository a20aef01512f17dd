//! End-to-end checks of the derived views over one status map

use chrono::NaiveDate;
use waypoint_common::achievements::{unlocked_for_stats, UnlockTracker};
use waypoint_common::models::{TravelSnapshot, TravelStatus, TripData};
use waypoint_common::reference::{countries_in, CONTINENTS};
use waypoint_common::stats::compute_stats;
use waypoint_common::timeline::build_timeline;

#[test]
fn test_full_oceania_unlocks_continent_completion() {
    let mut snapshot = TravelSnapshot::default();
    for country in countries_in("oceania") {
        snapshot.statuses.insert(country.id.to_string(), TravelStatus::Visited);
    }

    let stats = compute_stats(&snapshot.statuses);
    let oceania = stats.continent("oceania").unwrap();
    assert_eq!(oceania.visited, oceania.total);
    assert_eq!(oceania.percentage, 100);

    let unlocked: Vec<&str> = unlocked_for_stats(&stats).iter().map(|a| a.id).collect();
    assert!(unlocked.contains(&"island-hopper"));
    assert!(unlocked.contains(&"oceania-complete"));
    assert!(unlocked.contains(&"adventurer"));
    assert!(!unlocked.contains(&"globetrotter"));
}

#[test]
fn test_every_continent_reported_even_when_untouched() {
    let stats = compute_stats(&Default::default());
    for continent in CONTINENTS {
        let progress = stats.continent(continent.id).unwrap();
        assert_eq!(progress.visited, 0);
        assert_eq!(progress.percentage, 0);
    }
}

#[test]
fn test_tracker_and_timeline_follow_status_changes() {
    let mut snapshot = TravelSnapshot::default();
    let mut tracker = UnlockTracker::new();

    snapshot.statuses.insert("NZ".into(), TravelStatus::Visited);
    let baseline = unlocked_for_stats(&compute_stats(&snapshot.statuses));
    assert!(tracker.observe(&baseline).is_empty());

    for id in ["AU", "FJ"] {
        snapshot.statuses.insert(id.into(), TravelStatus::Visited);
    }
    snapshot.trips.insert(
        "FJ".into(),
        TripData {
            date: NaiveDate::from_ymd_opt(2024, 8, 3),
            ..Default::default()
        },
    );

    let fresh: Vec<&str> = tracker
        .observe(&unlocked_for_stats(&compute_stats(&snapshot.statuses)))
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(fresh, vec!["island-hopper"]);

    let timeline = build_timeline(&snapshot);
    assert_eq!(timeline[0].year, Some(2024));
    assert_eq!(timeline[0].entries[0].country_id, "FJ");
    assert_eq!(timeline.last().unwrap().entries.len(), 2);
}
