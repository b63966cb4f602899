//! Back-of-house worker API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/backworkers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/all", get(handler::list))
        .route("/{selector}", get(handler::get_by_id))
}
