//! Food Repository
//!
//! Read model over the menu: types, items, ingredients and tags.

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{FoodItem, FoodItemDetails, FoodItemsByType, FoodType, Ingredient, Tag};
use sqlx::{SqliteConnection, SqlitePool};

const ITEM_COLUMNS: &str = "id AS food_item_id, food_type_id, name, price";

pub async fn find_all_items(pool: &SqlitePool) -> RepoResult<Vec<FoodItem>> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM food_item ORDER BY id");
    let rows = sqlx::query_as::<_, FoodItem>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Items of one food type; an unknown type is an error, a known type with
/// no items yields an empty list
pub async fn find_items_by_type(pool: &SqlitePool, food_type_id: i64) -> RepoResult<Vec<FoodItem>> {
    let mut tx = pool.begin().await?;

    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM food_type WHERE id = ?")
        .bind(food_type_id)
        .fetch_optional(&mut *tx)
        .await?;
    if exists.is_none() {
        return Err(RepoError::not_found(
            ErrorCode::FoodTypeNotFound,
            format!("Food type {food_type_id} not found"),
        ));
    }

    let sql = format!("SELECT {ITEM_COLUMNS} FROM food_item WHERE food_type_id = ? ORDER BY id");
    let rows = sqlx::query_as::<_, FoodItem>(&sql)
        .bind(food_type_id)
        .fetch_all(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(rows)
}

/// Every food type name mapped to its items, empty types included
pub async fn find_items_grouped(pool: &SqlitePool) -> RepoResult<FoodItemsByType> {
    let mut tx = pool.begin().await?;

    let types = sqlx::query_as::<_, FoodType>(
        "SELECT id AS food_type_id, name FROM food_type ORDER BY id",
    )
    .fetch_all(&mut *tx)
    .await?;
    let sql = format!("SELECT {ITEM_COLUMNS} FROM food_item ORDER BY id");
    let items = sqlx::query_as::<_, FoodItem>(&sql)
        .fetch_all(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(group_by_type(types, items))
}

fn group_by_type(types: Vec<FoodType>, items: Vec<FoodItem>) -> FoodItemsByType {
    let mut grouped = FoodItemsByType::new();
    let mut names = std::collections::HashMap::with_capacity(types.len());
    for food_type in types {
        grouped.entry(food_type.name.clone()).or_default();
        names.insert(food_type.food_type_id, food_type.name);
    }
    for item in items {
        if let Some(name) = names.get(&item.food_type_id) {
            grouped.entry(name.clone()).or_default().push(item);
        }
    }
    grouped
}

pub async fn find_all_ingredients(pool: &SqlitePool) -> RepoResult<Vec<Ingredient>> {
    let rows = sqlx::query_as::<_, Ingredient>(
        "SELECT id AS ingredient_id, name FROM ingredient ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_all_tags(pool: &SqlitePool) -> RepoResult<Vec<Tag>> {
    let rows = sqlx::query_as::<_, Tag>("SELECT id AS tag_id, name FROM item_tag ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_ingredients_for_item(
    pool: &SqlitePool,
    food_item_id: i64,
) -> RepoResult<Vec<Ingredient>> {
    let mut tx = pool.begin().await?;
    ensure_item(&mut tx, food_item_id).await?;
    let rows = fetch_item_ingredients(&mut tx, food_item_id).await?;
    tx.commit().await?;
    Ok(rows)
}

pub async fn find_tags_for_item(pool: &SqlitePool, food_item_id: i64) -> RepoResult<Vec<Tag>> {
    let mut tx = pool.begin().await?;
    ensure_item(&mut tx, food_item_id).await?;
    let rows = fetch_item_tags(&mut tx, food_item_id).await?;
    tx.commit().await?;
    Ok(rows)
}

/// Ingredients and tags of one item from one snapshot
pub async fn find_item_details(
    pool: &SqlitePool,
    food_item_id: i64,
) -> RepoResult<FoodItemDetails> {
    let mut tx = pool.begin().await?;
    ensure_item(&mut tx, food_item_id).await?;
    let ingredients = fetch_item_ingredients(&mut tx, food_item_id).await?;
    let tags = fetch_item_tags(&mut tx, food_item_id).await?;
    tx.commit().await?;
    Ok(FoodItemDetails { ingredients, tags })
}

async fn ensure_item(conn: &mut SqliteConnection, food_item_id: i64) -> RepoResult<()> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM food_item WHERE id = ?")
        .bind(food_item_id)
        .fetch_optional(&mut *conn)
        .await?;
    match exists {
        Some(_) => Ok(()),
        None => Err(RepoError::not_found(
            ErrorCode::FoodItemNotFound,
            format!("Food item {food_item_id} not found"),
        )),
    }
}

async fn fetch_item_ingredients(
    conn: &mut SqliteConnection,
    food_item_id: i64,
) -> RepoResult<Vec<Ingredient>> {
    let rows = sqlx::query_as::<_, Ingredient>(
        "SELECT i.id AS ingredient_id, i.name FROM ingredient i \
         WHERE i.id IN (SELECT DISTINCT ingredient_id FROM food_ingredient WHERE food_item_id = ?) \
         ORDER BY i.id",
    )
    .bind(food_item_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

async fn fetch_item_tags(conn: &mut SqliteConnection, food_item_id: i64) -> RepoResult<Vec<Tag>> {
    let rows = sqlx::query_as::<_, Tag>(
        "SELECT t.id AS tag_id, t.name FROM item_tag t \
         WHERE t.id IN (SELECT DISTINCT tag_id FROM food_tag WHERE food_item_id = ?) \
         ORDER BY t.id",
    )
    .bind(food_item_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
