//! Menu Models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Food type (menu section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FoodType {
    #[serde(rename = "foodTypeID")]
    pub food_type_id: i64,
    pub name: String,
}

/// Food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FoodItem {
    #[serde(rename = "foodItemID")]
    pub food_item_id: i64,
    #[serde(rename = "foodTypeID")]
    pub food_type_id: i64,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Ingredient {
    #[serde(rename = "ingredientID")]
    pub ingredient_id: i64,
    pub name: String,
}

/// Item tag ("vegan", "spicy", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Tag {
    #[serde(rename = "tagID")]
    pub tag_id: i64,
    pub name: String,
}

/// Food items keyed by food type name; every type is present, possibly empty
pub type FoodItemsByType = BTreeMap<String, Vec<FoodItem>>;

/// Ingredients and tags of one food item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemDetails {
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<Ingredient>,
    #[serde(rename = "Tags")]
    pub tags: Vec<Tag>,
}
