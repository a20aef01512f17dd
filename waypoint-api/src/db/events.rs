//! Event persistence
//!
//! Coordinates are stored as separate latitude/longitude columns and read
//! back through the coordinate normalizer.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use waypoint_common::geo::normalize;
use waypoint_common::models::Event;
use waypoint_common::timeline::sort_events;

const SELECT_EVENT: &str = r#"
    SELECT id, title, description, city, country, latitude, longitude,
           start_date, end_date, image_url, max_participants, category, status,
           created_at, updated_at
    FROM events
"#;

fn event_from_row(row: &SqliteRow) -> sqlx::Result<Event> {
    let max_participants: Option<i64> = row.try_get("max_participants")?;
    Ok(Event {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        city: row.try_get("city")?,
        country: row.try_get("country")?,
        coordinates: normalize(row.try_get("latitude")?, row.try_get("longitude")?),
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        image_url: row.try_get("image_url")?,
        max_participants: max_participants.and_then(|v| u32::try_from(v).ok()),
        category: row.try_get("category")?,
        status: row.try_get("status")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// All events in canonical order (ascending start date)
pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Event>> {
    let rows = sqlx::query(SELECT_EVENT).fetch_all(pool).await?;
    let mut events = rows.iter().map(event_from_row).collect::<sqlx::Result<Vec<_>>>()?;
    sort_events(&mut events);
    Ok(events)
}

pub async fn get(pool: &SqlitePool, id: &str) -> sqlx::Result<Option<Event>> {
    let sql = format!("{} WHERE id = ?", SELECT_EVENT);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    row.as_ref().map(event_from_row).transpose()
}

pub async fn insert(pool: &SqlitePool, event: &Event) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO events (id, title, description, city, country, latitude, longitude,
                            start_date, end_date, image_url, max_participants, category,
                            status, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&event.id)
    .bind(&event.title)
    .bind(&event.description)
    .bind(&event.city)
    .bind(&event.country)
    .bind(event.coordinates.lat())
    .bind(event.coordinates.lng())
    .bind(event.start_date)
    .bind(event.end_date)
    .bind(&event.image_url)
    .bind(event.max_participants.map(i64::from))
    .bind(&event.category)
    .bind(&event.status)
    .bind(event.created_at)
    .bind(event.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Overwrite every mutable column of an existing event
pub async fn update(pool: &SqlitePool, event: &Event) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE events
        SET title = ?, description = ?, city = ?, country = ?, latitude = ?, longitude = ?,
            start_date = ?, end_date = ?, image_url = ?, max_participants = ?, category = ?,
            status = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&event.title)
    .bind(&event.description)
    .bind(&event.city)
    .bind(&event.country)
    .bind(event.coordinates.lat())
    .bind(event.coordinates.lng())
    .bind(event.start_date)
    .bind(event.end_date)
    .bind(&event.image_url)
    .bind(event.max_participants.map(i64::from))
    .bind(&event.category)
    .bind(&event.status)
    .bind(event.updated_at)
    .bind(&event.id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use waypoint_common::models::NewEvent;
    use waypoint_common::LatLng;

    async fn pool() -> (tempfile::TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let pool = crate::db::init_database(&dir.path().join("t.db")).await.unwrap();
        (dir, pool)
    }

    fn event(id: &str, day: u32) -> Event {
        let start = Utc.with_ymd_and_hms(2025, 6, day, 10, 0, 0).unwrap();
        NewEvent {
            title: Some(format!("Event {id}")),
            description: Some("d".into()),
            city: Some("Oslo".into()),
            country: Some("Norway".into()),
            coordinates: Some(LatLng(59.91, 10.75)),
            start_date: Some(start),
            end_date: Some(start),
            category: Some("meetup".into()),
            status: Some("planned".into()),
            max_participants: Some(40),
            ..Default::default()
        }
        .validate()
        .unwrap()
        .into_event(id.into(), start)
    }

    #[tokio::test]
    async fn test_insert_get_round_trip() {
        let (_dir, pool) = pool().await;
        let e = event("a", 3);
        insert(&pool, &e).await.unwrap();
        assert_eq!(get(&pool, "a").await.unwrap(), Some(e));
        assert_eq!(get(&pool, "missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_swapped_columns_are_repaired_on_read() {
        let (_dir, pool) = pool().await;
        let mut e = event("a", 3);
        // A producer wrote (lng, lat) into the latitude/longitude columns
        e.coordinates = LatLng(151.2093, -33.8688);
        insert(&pool, &e).await.unwrap();
        let read = get(&pool, "a").await.unwrap().unwrap();
        assert_eq!(read.coordinates, LatLng(-33.8688, 151.2093));
    }

    #[tokio::test]
    async fn test_list_sorted_by_start() {
        let (_dir, pool) = pool().await;
        for (id, day) in [("late", 20), ("early", 2), ("mid", 10)] {
            insert(&pool, &event(id, day)).await.unwrap();
        }
        let ids: Vec<String> = list(&pool).await.unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["early", "mid", "late"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_missing_rows() {
        let (_dir, pool) = pool().await;
        assert!(!update(&pool, &event("ghost", 1)).await.unwrap());
        assert!(!delete(&pool, "ghost").await.unwrap());
        insert(&pool, &event("a", 1)).await.unwrap();
        assert!(delete(&pool, "a").await.unwrap());
    }
}
