//! Order Repository
//!
//! Orders are created elsewhere; here they are listed and completed by
//! assigning a back-of-house worker.

use super::{RepoError, RepoResult, begin_write};
use shared::error::ErrorCode;
use shared::models::{Order, OrdersGrouped};
use sqlx::{SqliteConnection, SqlitePool};

const ORDER_COLUMNS: &str =
    "id AS order_id, customer_id, table_id, food_item_id, back_worker_id, placed_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM customer_order ORDER BY id");
    let rows = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Pending and completed orders from one snapshot
pub async fn find_grouped(pool: &SqlitePool) -> RepoResult<OrdersGrouped> {
    let mut tx = pool.begin().await?;

    let upcoming = fetch_by_completion(&mut tx, false).await?;
    let completed = fetch_by_completion(&mut tx, true).await?;

    tx.commit().await?;
    Ok(OrdersGrouped {
        upcoming,
        completed,
    })
}

async fn fetch_by_completion(
    conn: &mut SqliteConnection,
    completed: bool,
) -> RepoResult<Vec<Order>> {
    let filter = if completed {
        "back_worker_id IS NOT NULL"
    } else {
        "back_worker_id IS NULL"
    };
    let sql = format!("SELECT {ORDER_COLUMNS} FROM customer_order WHERE {filter} ORDER BY id");
    let rows = sqlx::query_as::<_, Order>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// Mark an order completed by `back_worker_id`; an already completed order
/// is reassigned.
pub async fn assign_back_worker(
    pool: &SqlitePool,
    order_id: i64,
    back_worker_id: i64,
) -> RepoResult<()> {
    let mut tx = begin_write(pool).await?;

    let worker = sqlx::query_scalar::<_, i64>("SELECT id FROM back_worker WHERE id = ?")
        .bind(back_worker_id)
        .fetch_optional(&mut *tx)
        .await?;
    if worker.is_none() {
        return Err(RepoError::not_found(
            ErrorCode::BackWorkerNotFound,
            format!("Back worker {back_worker_id} not found"),
        ));
    }

    let rows = sqlx::query("UPDATE customer_order SET back_worker_id = ? WHERE id = ?")
        .bind(back_worker_id)
        .bind(order_id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::not_found(
            ErrorCode::OrderNotFound,
            format!("Order {order_id} not found"),
        ));
    }

    tx.commit().await?;
    Ok(())
}
