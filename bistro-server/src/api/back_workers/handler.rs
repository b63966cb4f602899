//! Back-of-house worker handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::BackWorker;

use crate::core::ServerState;
use crate::db::repository::worker;
use crate::utils::{AppError, AppResult, ErrorCode, parse_selector};

/// GET /backworkers/all
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BackWorker>>> {
    let workers = worker::find_all_back(state.pool()).await?;
    Ok(Json(workers))
}

/// GET /backworkers/backWorkerID={id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(selector): Path<String>,
) -> AppResult<Json<BackWorker>> {
    let id = parse_selector(&selector, "backWorkerID")?;
    let found = worker::find_back_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::BackWorkerNotFound,
                format!("Back worker {id} not found"),
            )
        })?;
    Ok(Json(found))
}
