//! Member persistence

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use waypoint_common::geo::normalize_optional;
use waypoint_common::models::member::sort_members;
use waypoint_common::models::Member;

const SELECT_MEMBER: &str = r#"
    SELECT id, first_name, last_name, email, phone, city, country, latitude, longitude,
           notes, created_at, updated_at
    FROM members
"#;

fn member_from_row(row: &SqliteRow) -> sqlx::Result<Member> {
    Ok(Member {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        city: row.try_get("city")?,
        country: row.try_get("country")?,
        coordinates: normalize_optional(row.try_get("latitude")?, row.try_get("longitude")?),
        notes: row.try_get("notes")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// All members ordered by last name, then first name
pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Member>> {
    let rows = sqlx::query(SELECT_MEMBER).fetch_all(pool).await?;
    let mut members = rows.iter().map(member_from_row).collect::<sqlx::Result<Vec<_>>>()?;
    sort_members(&mut members);
    Ok(members)
}

pub async fn get(pool: &SqlitePool, id: &str) -> sqlx::Result<Option<Member>> {
    let sql = format!("{} WHERE id = ?", SELECT_MEMBER);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    row.as_ref().map(member_from_row).transpose()
}

pub async fn exists(pool: &SqlitePool, id: &str) -> sqlx::Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn insert(pool: &SqlitePool, member: &Member) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO members (id, first_name, last_name, email, phone, city, country,
                             latitude, longitude, notes, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&member.id)
    .bind(&member.first_name)
    .bind(&member.last_name)
    .bind(&member.email)
    .bind(&member.phone)
    .bind(&member.city)
    .bind(&member.country)
    .bind(member.coordinates.map(|c| c.lat()))
    .bind(member.coordinates.map(|c| c.lng()))
    .bind(&member.notes)
    .bind(member.created_at)
    .bind(member.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update(pool: &SqlitePool, member: &Member) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE members
        SET first_name = ?, last_name = ?, email = ?, phone = ?, city = ?, country = ?,
            latitude = ?, longitude = ?, notes = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&member.first_name)
    .bind(&member.last_name)
    .bind(&member.email)
    .bind(&member.phone)
    .bind(&member.city)
    .bind(&member.country)
    .bind(member.coordinates.map(|c| c.lat()))
    .bind(member.coordinates.map(|c| c.lng()))
    .bind(&member.notes)
    .bind(member.updated_at)
    .bind(&member.id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a member together with every relationship touching it
pub async fn delete(pool: &SqlitePool, id: &str) -> sqlx::Result<bool> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM relationships WHERE from_member_id = ? OR to_member_id = ?")
        .bind(id)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM members WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
