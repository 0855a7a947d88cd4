//! Recipe factory for creating test recipes with their input and output amounts.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test recipes.
///
/// Inputs and outputs are `(item_id, amount)` pairs inserted into `recipe_input`
/// and `recipe_output` after the recipe row.
pub struct RecipeFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    inputs: Vec<(i32, i32)>,
    outputs: Vec<(i32, i32)>,
}

impl<'a> RecipeFactory<'a> {
    /// Creates a new RecipeFactory with no inputs or outputs.
    pub fn new(db: &'a DatabaseConnection, game_id: i32) -> Self {
        Self {
            db,
            game_id,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Adds an ingredient consumed by the recipe.
    pub fn input(mut self, item_id: i32, amount: i32) -> Self {
        self.inputs.push((item_id, amount));
        self
    }

    /// Adds a product of the recipe.
    pub fn output(mut self, item_id: i32, amount: i32) -> Self {
        self.outputs.push((item_id, amount));
        self
    }

    /// Builds and inserts the recipe and its amount rows.
    ///
    /// # Returns
    /// - `Ok(entity::recipe::Model)` - Created recipe entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (item_id, amount) in self.inputs {
            entity::recipe_input::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                item_id: ActiveValue::Set(item_id),
                amount: ActiveValue::Set(amount),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for (item_id, amount) in self.outputs {
            entity::recipe_output::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                item_id: ActiveValue::Set(item_id),
                amount: ActiveValue::Set(amount),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(recipe)
    }
}

/// Creates a recipe without inputs or outputs for the given game.
pub async fn create_recipe(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::recipe::Model, DbErr> {
    RecipeFactory::new(db, game_id).build().await
}
