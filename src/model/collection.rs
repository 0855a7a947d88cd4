use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemAmountDto {
    pub item_id: i32,
    pub amount: i32,
}

/// A group as seen by the requesting user.
///
/// `itemAmounts` are shared by every viewer; the preference fields and
/// `itemRecipePreferenceMap` belong to the viewer only. A map entry with a `null`
/// value records that the viewer explicitly chose no recipe for that item; a missing
/// entry means no choice was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: i32,
    pub collection_id: i32,
    pub name: String,
    pub item_amounts: Vec<ItemAmountDto>,
    pub show_base_ingredients: bool,
    pub collapse_ingredients: bool,
    pub cost_reduction: f32,
    pub item_recipe_preference_map: BTreeMap<i32, Option<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDto {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    pub name: String,
    pub groups: Vec<GroupDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGroupDto {
    pub name: String,
    #[serde(default)]
    pub item_amounts: Vec<ItemAmountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCollectionDto {
    pub game_id: i32,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<NewGroupDto>,
}

/// Admin-only body for creating a collection owned by another user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAdminCollectionDto {
    pub user_id: i32,
    pub game_id: i32,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<NewGroupDto>,
}

/// Group entry of a collection update. Entries without an id create a new group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionGroupDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub item_amounts: Vec<ItemAmountDto>,
}

/// Body for updating a collection.
///
/// Omitting `gameId` keeps the current game. Omitting `groups` leaves every group
/// untouched; supplying it replaces the group list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionDto {
    pub name: String,
    #[serde(default)]
    pub game_id: Option<i32>,
    #[serde(default)]
    pub groups: Option<Vec<UpdateCollectionGroupDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateGroupDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemAmountDto {
    pub amount: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupPreferencesDto {
    pub show_base_ingredients: bool,
    pub collapse_ingredients: bool,
    pub cost_reduction: f32,
    #[serde(default)]
    pub item_recipe_preference_map: BTreeMap<i32, Option<i32>>,
}
