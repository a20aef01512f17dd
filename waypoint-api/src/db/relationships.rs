//! Relationship persistence

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use waypoint_common::models::member::sort_relationships;
use waypoint_common::models::Relationship;

const SELECT_RELATIONSHIP: &str = r#"
    SELECT id, from_member_id, to_member_id, type, description, created_at, updated_at
    FROM relationships
"#;

fn relationship_from_row(row: &SqliteRow) -> sqlx::Result<Relationship> {
    Ok(Relationship {
        id: row.try_get("id")?,
        from_member_id: row.try_get("from_member_id")?,
        to_member_id: row.try_get("to_member_id")?,
        relationship_type: row.try_get("type")?,
        description: row.try_get("description")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// All relationships, most recently created first
pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Relationship>> {
    let rows = sqlx::query(SELECT_RELATIONSHIP).fetch_all(pool).await?;
    let mut relationships = rows
        .iter()
        .map(relationship_from_row)
        .collect::<sqlx::Result<Vec<_>>>()?;
    sort_relationships(&mut relationships);
    Ok(relationships)
}

pub async fn get(pool: &SqlitePool, id: &str) -> sqlx::Result<Option<Relationship>> {
    let sql = format!("{} WHERE id = ?", SELECT_RELATIONSHIP);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    row.as_ref().map(relationship_from_row).transpose()
}

pub async fn insert(pool: &SqlitePool, relationship: &Relationship) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO relationships (id, from_member_id, to_member_id, type, description,
                                   created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&relationship.id)
    .bind(&relationship.from_member_id)
    .bind(&relationship.to_member_id)
    .bind(&relationship.relationship_type)
    .bind(&relationship.description)
    .bind(relationship.created_at)
    .bind(relationship.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update(pool: &SqlitePool, relationship: &Relationship) -> sqlx::Result<bool> {
    let result = sqlx::query(
        "UPDATE relationships SET type = ?, description = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&relationship.relationship_type)
    .bind(&relationship.description)
    .bind(relationship.updated_at)
    .bind(&relationship.id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM relationships WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
