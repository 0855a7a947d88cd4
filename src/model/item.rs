use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    pub categories: Vec<ItemCategoryDto>,
    /// Image id of the item picture.
    pub image: Option<i32>,
}

/// Body for creating or updating an item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestDto {
    pub game_id: i32,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<i32>,
    #[serde(default)]
    pub image: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemCategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewItemCategoryDto {
    pub name: String,
}
