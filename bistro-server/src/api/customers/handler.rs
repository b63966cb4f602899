//! Customers and waitlist handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Customer, WaitlistDequeue, WaitlistEnqueue, WaitlistEntry, WaitlistGrouped};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::db::repository::waitlist::{self, DequeueOutcome};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_group_size, validate_required_text,
};
use crate::utils::{AppResult, FormInput};

/// GET /customers/all
pub async fn list_customers(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = waitlist::find_all_customers(state.pool()).await?;
    Ok(Json(customers))
}

/// GET /customers/waitlist/all
pub async fn list_waitlist(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<WaitlistEntry>>> {
    let entries = waitlist::find_all_entries(state.pool()).await?;
    Ok(Json(entries))
}

/// GET /customers/waitlist/grouped=true
pub async fn grouped(State(state): State<ServerState>) -> AppResult<Json<WaitlistGrouped>> {
    let grouped = waitlist::find_grouped(state.pool()).await?;
    Ok(Json(grouped))
}

/// POST /customers/waitlist/enqueue
pub async fn enqueue(
    State(state): State<ServerState>,
    FormInput(payload): FormInput<WaitlistEnqueue>,
) -> AppResult<StatusCode> {
    validate_group_size(payload.group_size)?;
    validate_required_text(&payload.phone_number, "phoneNumber", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.first_name, "firstName", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "lastName", MAX_NAME_LEN)?;

    let customer_id = waitlist::enqueue(state.pool(), &payload, now_millis()).await?;
    tracing::info!(
        customer_id,
        group_size = payload.group_size,
        "Party joined the waitlist"
    );
    Ok(StatusCode::OK)
}

/// POST /customers/waitlist/dequeue
///
/// `tableID=null` takes the party off the list without seating it.
pub async fn dequeue(
    State(state): State<ServerState>,
    FormInput(payload): FormInput<WaitlistDequeue>,
) -> AppResult<StatusCode> {
    match waitlist::dequeue(state.pool(), &payload, now_millis()).await? {
        DequeueOutcome::Seated { table_id } => tracing::info!(
            customer_id = payload.customer_id,
            table_id,
            front_worker_id = ?payload.front_worker_id,
            "Party seated"
        ),
        DequeueOutcome::Left => tracing::info!(
            customer_id = payload.customer_id,
            "Party left the waitlist without a table"
        ),
    }
    Ok(StatusCode::OK)
}
