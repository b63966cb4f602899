//! Front-of-house worker API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/frontworkers", get(handler::list))
        .route("/frontworkers/", get(handler::list))
        .route("/frontworkers/{selector}", get(handler::get_by_id))
}
