//! Recipe catalog service.
//!
//! Writes run in a transaction because a recipe spans three tables.

use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::server::{
    data::{game::GameRepository, item::ItemRepository, recipe::RecipeRepository},
    error::{AppError, EntityKind},
    model::recipe::{Recipe, RecipeParam},
};

pub struct RecipeService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> RecipeService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a recipe.
    ///
    /// # Returns
    /// - `Ok(Recipe)` - The new recipe
    /// - `Err(AppError::NotFound)` - The game or an input/output item does not exist
    pub async fn create(&self, param: RecipeParam) -> Result<Recipe, AppError> {
        let txn = self.db.begin().await?;

        validate_references(&txn, &param).await?;
        let recipe = RecipeRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!("Created recipe {} for game {}", recipe.id, recipe.game_id);

        Ok(recipe)
    }

    pub async fn get_all(&self, game_id: Option<i32>) -> Result<Vec<Recipe>, AppError> {
        Ok(RecipeRepository::new(self.db).get_all(game_id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Recipe, AppError> {
        RecipeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Recipe, id))
    }

    /// Updates the game of a recipe and replaces its inputs and outputs.
    pub async fn update(&self, id: i32, param: RecipeParam) -> Result<Recipe, AppError> {
        let txn = self.db.begin().await?;

        validate_references(&txn, &param).await?;
        let recipe = RecipeRepository::new(&txn)
            .update(id, param)
            .await?
            .ok_or(AppError::not_found(EntityKind::Recipe, id))?;

        txn.commit().await?;

        Ok(recipe)
    }

    /// Deletes a recipe. Group item preferences choosing it fall back to "no recipe".
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !RecipeRepository::new(&txn).delete(id).await? {
            return Err(AppError::not_found(EntityKind::Recipe, id));
        }

        txn.commit().await?;

        tracing::info!("Deleted recipe {}", id);

        Ok(())
    }
}

async fn validate_references<C: ConnectionTrait>(
    db: &C,
    param: &RecipeParam,
) -> Result<(), AppError> {
    if GameRepository::new(db)
        .find_by_id(param.game_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found(EntityKind::Game, param.game_id));
    }

    let item_ids: Vec<i32> = param.item_ids().collect();
    if let Some(missing) = ItemRepository::new(db).find_missing(&item_ids).await?.first() {
        return Err(AppError::not_found(EntityKind::Item, *missing));
    }

    Ok(())
}
