//! Menu API
//!
//! | Path | Description |
//! |------|-------------|
//! | /foods/items/all | every food item |
//! | /foods/items/grouped=true | items keyed by food type name |
//! | /foods/items/foodTypeID={id} | items of one type |
//! | /foods/items/details/foodItemID={id} | ingredients and tags of an item |
//! | /foods/ingredients | every ingredient |
//! | /foods/ingredients/foodItemID={id} | ingredients of an item |
//! | /foods/tags | every tag |
//! | /foods/tags/foodItemID={id} | tags of an item |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/foods", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/items/all", get(handler::list_items))
        .route("/items/grouped=true", get(handler::items_grouped))
        .route("/items/details/{selector}", get(handler::item_details))
        .route("/items/{selector}", get(handler::items_by_type))
        .route("/ingredients", get(handler::list_ingredients))
        .route("/ingredients/{selector}", get(handler::item_ingredients))
        .route("/tags", get(handler::list_tags))
        .route("/tags/{selector}", get(handler::item_tags))
}
