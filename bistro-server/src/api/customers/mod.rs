//! Customers and waitlist API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/customers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/all", get(handler::list_customers))
        .route("/waitlist/all", get(handler::list_waitlist))
        .route("/waitlist/grouped=true", get(handler::grouped))
        .route("/waitlist/enqueue", post(handler::enqueue))
        .route("/waitlist/dequeue", post(handler::dequeue))
}
