use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::item::ItemCategoryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i32,
    pub name: String,
    /// Categories items of this game can be filed under.
    pub item_categories: Vec<ItemCategoryDto>,
    /// Image id of the icon.
    pub icon: Option<i32>,
    /// Image id of the banner.
    pub banner: Option<i32>,
}

/// Body for creating or updating a game.
///
/// On update the category list replaces the game's current categories.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameRequestDto {
    pub name: String,
    #[serde(default)]
    pub item_categories: Vec<i32>,
    #[serde(default)]
    pub icon: Option<i32>,
    #[serde(default)]
    pub banner: Option<i32>,
}
