//! Worker Repository

use super::RepoResult;
use shared::models::{BackWorker, FrontWorker};
use sqlx::SqlitePool;

pub async fn find_all_front(pool: &SqlitePool) -> RepoResult<Vec<FrontWorker>> {
    let rows = sqlx::query_as::<_, FrontWorker>(
        "SELECT id AS front_worker_id, first_name, last_name FROM front_worker ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_front_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<FrontWorker>> {
    let row = sqlx::query_as::<_, FrontWorker>(
        "SELECT id AS front_worker_id, first_name, last_name FROM front_worker WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_all_back(pool: &SqlitePool) -> RepoResult<Vec<BackWorker>> {
    let rows = sqlx::query_as::<_, BackWorker>(
        "SELECT id AS back_worker_id, first_name, last_name FROM back_worker ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_back_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<BackWorker>> {
    let row = sqlx::query_as::<_, BackWorker>(
        "SELECT id AS back_worker_id, first_name, last_name FROM back_worker WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
