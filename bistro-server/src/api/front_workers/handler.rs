//! Front-of-house worker handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::FrontWorker;

use crate::core::ServerState;
use crate::db::repository::worker;
use crate::utils::{AppError, AppResult, ErrorCode, parse_selector};

/// GET /frontworkers/
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<FrontWorker>>> {
    let workers = worker::find_all_front(state.pool()).await?;
    Ok(Json(workers))
}

/// GET /frontworkers/frontWorkerID={id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(selector): Path<String>,
) -> AppResult<Json<FrontWorker>> {
    let id = parse_selector(&selector, "frontWorkerID")?;
    let found = worker::find_front_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::FrontWorkerNotFound,
                format!("Front worker {id} not found"),
            )
        })?;
    Ok(Json(found))
}
