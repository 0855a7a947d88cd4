use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAmountDto {
    pub item_id: i32,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: i32,
    pub game_id: i32,
    pub input: Vec<RecipeAmountDto>,
    pub output: Vec<RecipeAmountDto>,
}

/// Body for creating or updating a recipe. Inputs and outputs replace the stored ones.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequestDto {
    pub game_id: i32,
    pub input: Vec<RecipeAmountDto>,
    pub output: Vec<RecipeAmountDto>,
}
