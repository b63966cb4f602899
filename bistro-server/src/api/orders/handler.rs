//! Order API Handlers

use axum::{Json, extract::State};
use shared::models::{BackWorkerAssignment, Order, OrdersGrouped};

use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{AppResult, FormInput};

/// GET /orders/all
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(state.pool()).await?;
    Ok(Json(orders))
}

/// GET /orders/grouped=true - `Upcoming` (no back worker) and `Completed`
pub async fn grouped(State(state): State<ServerState>) -> AppResult<Json<OrdersGrouped>> {
    let grouped = order::find_grouped(state.pool()).await?;
    Ok(Json(grouped))
}

/// POST /orders/update/backWorkerID - complete an order
///
/// Answers with a plain-text echo of the assignment.
pub async fn assign_back_worker(
    State(state): State<ServerState>,
    FormInput(payload): FormInput<BackWorkerAssignment>,
) -> AppResult<String> {
    order::assign_back_worker(state.pool(), payload.order_id, payload.back_worker_id).await?;
    tracing::info!(
        order_id = payload.order_id,
        back_worker_id = payload.back_worker_id,
        "Order completed"
    );
    Ok(format!(
        "OrderID: {}, backWorkerID: {}",
        payload.order_id, payload.back_worker_id
    ))
}
