//! Recipe domain models and parameters.
//!
//! A recipe belongs to one game and turns input item amounts into output item amounts.

use crate::model::recipe::{RecipeAmountDto, RecipeDto, RecipeRequestDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeAmount {
    pub item_id: i32,
    pub amount: i32,
}

impl RecipeAmount {
    pub fn into_dto(self) -> RecipeAmountDto {
        RecipeAmountDto {
            item_id: self.item_id,
            amount: self.amount,
        }
    }

    pub fn from_dto(dto: RecipeAmountDto) -> Self {
        Self {
            item_id: dto.item_id,
            amount: dto.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i32,
    pub game_id: i32,
    pub input: Vec<RecipeAmount>,
    pub output: Vec<RecipeAmount>,
}

impl Recipe {
    /// Builds a recipe from its row and the amount rows that reference it.
    ///
    /// Amount rows are kept in insertion (id) order.
    pub fn from_entity(
        entity: entity::recipe::Model,
        mut inputs: Vec<entity::recipe_input::Model>,
        mut outputs: Vec<entity::recipe_output::Model>,
    ) -> Self {
        inputs.sort_by_key(|row| row.id);
        outputs.sort_by_key(|row| row.id);

        Self {
            id: entity.id,
            game_id: entity.game_id,
            input: inputs
                .into_iter()
                .map(|row| RecipeAmount {
                    item_id: row.item_id,
                    amount: row.amount,
                })
                .collect(),
            output: outputs
                .into_iter()
                .map(|row| RecipeAmount {
                    item_id: row.item_id,
                    amount: row.amount,
                })
                .collect(),
        }
    }

    pub fn into_dto(self) -> RecipeDto {
        RecipeDto {
            id: self.id,
            game_id: self.game_id,
            input: self.input.into_iter().map(RecipeAmount::into_dto).collect(),
            output: self.output.into_iter().map(RecipeAmount::into_dto).collect(),
        }
    }
}

/// Parameters for creating or updating a recipe.
#[derive(Debug, Clone)]
pub struct RecipeParam {
    pub game_id: i32,
    pub input: Vec<RecipeAmount>,
    pub output: Vec<RecipeAmount>,
}

impl RecipeParam {
    pub fn from_dto(dto: RecipeRequestDto) -> Self {
        Self {
            game_id: dto.game_id,
            input: dto.input.into_iter().map(RecipeAmount::from_dto).collect(),
            output: dto.output.into_iter().map(RecipeAmount::from_dto).collect(),
        }
    }

    /// Every item id referenced by the inputs and outputs, possibly repeated.
    pub fn item_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.input
            .iter()
            .chain(self.output.iter())
            .map(|amount| amount.item_id)
    }
}
