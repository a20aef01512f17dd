//! Travel state persistence
//!
//! Statuses live in `travel_status`; each trip record is stored as one JSON
//! document per country in `trips`.

use sqlx::SqlitePool;
use tracing::warn;
use waypoint_common::models::{TravelSnapshot, TravelStatus, TripData};

pub async fn load(pool: &SqlitePool) -> sqlx::Result<TravelSnapshot> {
    let mut snapshot = TravelSnapshot::default();

    let statuses: Vec<(String, String)> =
        sqlx::query_as("SELECT country_id, status FROM travel_status")
            .fetch_all(pool)
            .await?;
    for (country_id, status) in statuses {
        match status.parse::<TravelStatus>() {
            Ok(status) => {
                snapshot.statuses.insert(country_id, status);
            }
            Err(e) => warn!(country_id = %country_id, "Skipping stored status: {}", e),
        }
    }

    let trips: Vec<(String, String)> = sqlx::query_as("SELECT country_id, data FROM trips")
        .fetch_all(pool)
        .await?;
    for (country_id, data) in trips {
        match serde_json::from_str::<TripData>(&data) {
            Ok(trip) => {
                snapshot.trips.insert(country_id, trip);
            }
            Err(e) => warn!(country_id = %country_id, "Skipping unreadable trip record: {}", e),
        }
    }

    Ok(snapshot)
}

/// Replace the stored travel state in one transaction
pub async fn replace(pool: &SqlitePool, snapshot: &TravelSnapshot) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM travel_status").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM trips").execute(&mut *tx).await?;

    for (country_id, status) in &snapshot.statuses {
        sqlx::query("INSERT INTO travel_status (country_id, status) VALUES (?, ?)")
            .bind(country_id)
            .bind(status.as_str())
            .execute(&mut *tx)
            .await?;
    }
    for (country_id, trip) in &snapshot.trips {
        let data = serde_json::to_string(trip).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        sqlx::query("INSERT INTO trips (country_id, data) VALUES (?, ?)")
            .bind(country_id)
            .bind(data)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}
