//! Dining Table Repository

use super::{RepoError, RepoResult, begin_write};
use shared::error::ErrorCode;
use shared::models::DiningTable;
use sqlx::SqlitePool;

/// Floor plan: every table with its type, serving worker and seating time,
/// ordered by table id
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let rows = sqlx::query_as::<_, DiningTable>(
        "SELECT t.id AS table_id, t.front_worker_id, fw.first_name || ' ' || fw.last_name AS worker_name, t.customer_id, t.capacity, tt.name AS type_name, c.seating_time \
         FROM dining_table t \
         JOIN table_type tt ON tt.id = t.table_type_id \
         LEFT JOIN front_worker fw ON fw.id = t.front_worker_id \
         LEFT JOIN customer c ON c.id = t.customer_id \
         ORDER BY t.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Vacate a table; returns the customer that was sitting there, if any.
///
/// Clearing a vacant table succeeds and leaves it vacant.
pub async fn clear(pool: &SqlitePool, table_id: i64) -> RepoResult<Option<i64>> {
    let mut tx = begin_write(pool).await?;

    let occupant = sqlx::query_scalar::<_, Option<i64>>(
        "SELECT customer_id FROM dining_table WHERE id = ?",
    )
    .bind(table_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| {
        RepoError::not_found(ErrorCode::TableNotFound, format!("Table {table_id} not found"))
    })?;

    sqlx::query("UPDATE dining_table SET customer_id = NULL, front_worker_id = NULL WHERE id = ?")
        .bind(table_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(occupant)
}
