//! Menu handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{FoodItem, FoodItemDetails, FoodItemsByType, Ingredient, Tag};

use crate::core::ServerState;
use crate::db::repository::food;
use crate::utils::{AppResult, parse_selector};

pub async fn list_items(State(state): State<ServerState>) -> AppResult<Json<Vec<FoodItem>>> {
    Ok(Json(food::find_all_items(state.pool()).await?))
}

pub async fn items_grouped(State(state): State<ServerState>) -> AppResult<Json<FoodItemsByType>> {
    Ok(Json(food::find_items_grouped(state.pool()).await?))
}

/// GET /foods/items/foodTypeID={id}
pub async fn items_by_type(
    State(state): State<ServerState>,
    Path(selector): Path<String>,
) -> AppResult<Json<Vec<FoodItem>>> {
    let food_type_id = parse_selector(&selector, "foodTypeID")?;
    Ok(Json(food::find_items_by_type(state.pool(), food_type_id).await?))
}

/// GET /foods/items/details/foodItemID={id}
pub async fn item_details(
    State(state): State<ServerState>,
    Path(selector): Path<String>,
) -> AppResult<Json<FoodItemDetails>> {
    let food_item_id = parse_selector(&selector, "foodItemID")?;
    Ok(Json(food::find_item_details(state.pool(), food_item_id).await?))
}

pub async fn list_ingredients(State(state): State<ServerState>) -> AppResult<Json<Vec<Ingredient>>> {
    Ok(Json(food::find_all_ingredients(state.pool()).await?))
}

/// GET /foods/ingredients/foodItemID={id}
pub async fn item_ingredients(
    State(state): State<ServerState>,
    Path(selector): Path<String>,
) -> AppResult<Json<Vec<Ingredient>>> {
    let food_item_id = parse_selector(&selector, "foodItemID")?;
    Ok(Json(
        food::find_ingredients_for_item(state.pool(), food_item_id).await?,
    ))
}

pub async fn list_tags(State(state): State<ServerState>) -> AppResult<Json<Vec<Tag>>> {
    Ok(Json(food::find_all_tags(state.pool()).await?))
}

/// GET /foods/tags/foodItemID={id}
pub async fn item_tags(
    State(state): State<ServerState>,
    Path(selector): Path<String>,
) -> AppResult<Json<Vec<Tag>>> {
    let food_item_id = parse_selector(&selector, "foodItemID")?;
    Ok(Json(food::find_tags_for_item(state.pool(), food_item_id).await?))
}
