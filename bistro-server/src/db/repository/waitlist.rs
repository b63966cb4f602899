//! Waitlist Repository
//!
//! Customers join the queue with `enqueue` and leave it with `dequeue`,
//! optionally being seated at a table on the way out.

use super::{RepoError, RepoResult, begin_write};
use shared::error::ErrorCode;
use shared::models::{
    Customer, WaitlistDequeue, WaitlistEnqueue, WaitlistEntry, WaitlistGrouped,
    WaitlistPartyEntry,
};
use sqlx::{SqliteConnection, SqlitePool};

const PARTY_COLUMNS: &str = "w.customer_id, w.phone_number, w.first_name, w.last_name, w.join_time, w.exit_time, c.group_size";

/// Result of a successful dequeue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeueOutcome {
    /// Party was seated at the table
    Seated { table_id: i64 },
    /// Party left the queue without a table (no-show, cancellation)
    Left,
}

pub async fn find_all_customers(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let rows = sqlx::query_as::<_, Customer>(
        "SELECT id AS customer_id, group_size, seating_time FROM customer ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Every waitlist entry, waiting or not, in insertion order
pub async fn find_all_entries(pool: &SqlitePool) -> RepoResult<Vec<WaitlistEntry>> {
    let rows = sqlx::query_as::<_, WaitlistEntry>(
        "SELECT customer_id, phone_number, first_name, last_name, join_time, exit_time FROM waitlist ORDER BY customer_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_waiting(pool: &SqlitePool) -> RepoResult<Vec<WaitlistPartyEntry>> {
    let mut conn = pool.acquire().await?;
    fetch_parties(&mut conn, false).await
}

pub async fn find_seated(pool: &SqlitePool) -> RepoResult<Vec<WaitlistPartyEntry>> {
    let mut conn = pool.acquire().await?;
    fetch_parties(&mut conn, true).await
}

/// Mean wait in seconds over exited entries, `None` when nobody has exited
pub async fn average_wait_seconds(pool: &SqlitePool) -> RepoResult<Option<f64>> {
    let mut conn = pool.acquire().await?;
    fetch_average_wait(&mut conn).await
}

/// Waiting and exited parties plus the average wait, from one snapshot
pub async fn find_grouped(pool: &SqlitePool) -> RepoResult<WaitlistGrouped> {
    let mut tx = pool.begin().await?;

    let average_wait = fetch_average_wait(&mut tx).await?;
    let waiting = fetch_parties(&mut tx, false).await?;
    let seated = fetch_parties(&mut tx, true).await?;

    tx.commit().await?;

    Ok(WaitlistGrouped {
        average_wait,
        waiting,
        seated,
    })
}

async fn fetch_parties(
    conn: &mut SqliteConnection,
    exited: bool,
) -> RepoResult<Vec<WaitlistPartyEntry>> {
    let filter = if exited {
        "w.exit_time IS NOT NULL"
    } else {
        "w.exit_time IS NULL"
    };
    let sql = format!(
        "SELECT {PARTY_COLUMNS} FROM waitlist w JOIN customer c ON c.id = w.customer_id WHERE {filter} ORDER BY w.customer_id"
    );
    let rows = sqlx::query_as::<_, WaitlistPartyEntry>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

async fn fetch_average_wait(conn: &mut SqliteConnection) -> RepoResult<Option<f64>> {
    let avg = sqlx::query_scalar::<_, Option<f64>>(
        "SELECT AVG((exit_time - join_time) / 1000.0) FROM waitlist WHERE exit_time IS NOT NULL",
    )
    .fetch_one(&mut *conn)
    .await?;
    Ok(avg)
}

/// Create the customer and its waitlist entry; returns the new customer id
pub async fn enqueue(pool: &SqlitePool, data: &WaitlistEnqueue, now: i64) -> RepoResult<i64> {
    if data.group_size < 1 {
        return Err(RepoError::validation(
            ErrorCode::InvalidGroupSize,
            format!("groupSize must be at least 1, got {}", data.group_size),
        ));
    }

    let mut tx = begin_write(pool).await?;

    let customer_id =
        sqlx::query_scalar::<_, i64>("INSERT INTO customer (group_size) VALUES (?) RETURNING id")
            .bind(data.group_size)
            .fetch_one(&mut *tx)
            .await?;

    sqlx::query(
        "INSERT INTO waitlist (customer_id, phone_number, first_name, last_name, join_time) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(customer_id)
    .bind(&data.phone_number)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(customer_id)
}

/// Close the customer's open waitlist entry, seating the party if a table
/// is given.
///
/// Every precondition is checked before the first write; any rejection
/// leaves the store untouched.
pub async fn dequeue(
    pool: &SqlitePool,
    data: &WaitlistDequeue,
    now: i64,
) -> RepoResult<DequeueOutcome> {
    let customer_id = data.customer_id;
    let mut tx = begin_write(pool).await?;

    let (group_size, open_entry) = sqlx::query_as::<_, (i64, Option<i64>)>(
        "SELECT c.group_size, w.customer_id FROM customer c \
         LEFT JOIN waitlist w ON w.customer_id = c.id AND w.exit_time IS NULL \
         WHERE c.id = ?",
    )
    .bind(customer_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| {
        RepoError::not_found(
            ErrorCode::CustomerNotFound,
            format!("Customer {customer_id} not found"),
        )
    })?;
    if open_entry.is_none() {
        return Err(not_waiting(customer_id));
    }

    if let Some(table_id) = data.table_id {
        let (capacity, occupant) = sqlx::query_as::<_, (i64, Option<i64>)>(
            "SELECT capacity, customer_id FROM dining_table WHERE id = ?",
        )
        .bind(table_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            RepoError::not_found(ErrorCode::TableNotFound, format!("Table {table_id} not found"))
        })?;

        if let Some(occupant) = occupant {
            return Err(RepoError::conflict(
                ErrorCode::TableOccupied,
                format!("Table {table_id} is occupied by customer {occupant}"),
            ));
        }
        if capacity < group_size {
            return Err(RepoError::validation(
                ErrorCode::TableCapacityExceeded,
                format!("Table {table_id} seats {capacity}, party has {group_size}"),
            ));
        }
        if let Some(worker_id) = data.front_worker_id {
            let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM front_worker WHERE id = ?")
                .bind(worker_id)
                .fetch_optional(&mut *tx)
                .await?;
            if exists.is_none() {
                return Err(RepoError::not_found(
                    ErrorCode::FrontWorkerNotFound,
                    format!("Front worker {worker_id} not found"),
                ));
            }
        }
    }

    // exit_time never precedes join_time, even if the clock stepped back
    let exited = sqlx::query(
        "UPDATE waitlist SET exit_time = MAX(?, join_time) WHERE customer_id = ? AND exit_time IS NULL",
    )
    .bind(now)
    .bind(customer_id)
    .execute(&mut *tx)
    .await?;
    if exited.rows_affected() == 0 {
        return Err(not_waiting(customer_id));
    }

    let outcome = match data.table_id {
        Some(table_id) => {
            let seated = sqlx::query(
                "UPDATE dining_table SET customer_id = ?, front_worker_id = ? WHERE id = ? AND customer_id IS NULL",
            )
            .bind(customer_id)
            .bind(data.front_worker_id)
            .bind(table_id)
            .execute(&mut *tx)
            .await?;
            if seated.rows_affected() == 0 {
                return Err(RepoError::conflict(
                    ErrorCode::TableOccupied,
                    format!("Table {table_id} is occupied"),
                ));
            }

            sqlx::query("UPDATE customer SET seating_time = ? WHERE id = ?")
                .bind(now)
                .bind(customer_id)
                .execute(&mut *tx)
                .await?;

            DequeueOutcome::Seated { table_id }
        }
        None => DequeueOutcome::Left,
    };

    tx.commit().await?;
    Ok(outcome)
}

fn not_waiting(customer_id: i64) -> RepoError {
    RepoError::not_found(
        ErrorCode::WaitlistEntryNotFound,
        format!("Customer {customer_id} is not waiting"),
    )
}
