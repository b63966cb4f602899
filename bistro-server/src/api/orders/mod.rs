//! Order API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/all", get(handler::list))
        .route("/grouped=true", get(handler::grouped))
        .route("/update/backWorkerID", post(handler::assign_back_worker))
}
