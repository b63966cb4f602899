//! Dining Table API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{DiningTable, TableClear};

use crate::core::ServerState;
use crate::db::repository::dining_table;
use crate::utils::{AppResult, FormInput};

/// GET /tables/all - floor plan ordered by table id
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_all(state.pool()).await?;
    Ok(Json(tables))
}

/// POST /tables/clear - vacate a table
pub async fn clear(
    State(state): State<ServerState>,
    FormInput(payload): FormInput<TableClear>,
) -> AppResult<StatusCode> {
    let previous = dining_table::clear(state.pool(), payload.table_id).await?;
    tracing::info!(
        table_id = payload.table_id,
        customer_id = ?previous,
        "Table cleared"
    );
    Ok(StatusCode::OK)
}
