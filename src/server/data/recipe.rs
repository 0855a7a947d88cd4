//! Recipe data repository.
//!
//! Recipes are stored as a `recipe` row plus `recipe_input` and `recipe_output` amount
//! rows. Reads always hydrate both amount lists.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::recipe::{Recipe, RecipeAmount, RecipeParam};

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a recipe together with its input and output rows.
    pub async fn create(&self, param: RecipeParam) -> Result<Recipe, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            game_id: ActiveValue::Set(param.game_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_amounts(recipe.id, &param.input, &param.output)
            .await?;

        self.hydrate_one(recipe).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Recipe>, DbErr> {
        match entity::prelude::Recipe::find_by_id(id).one(self.db).await? {
            Some(recipe) => Ok(Some(self.hydrate_one(recipe).await?)),
            None => Ok(None),
        }
    }

    /// Gets recipes ordered by id, optionally restricted to one game.
    pub async fn get_all(&self, game_id: Option<i32>) -> Result<Vec<Recipe>, DbErr> {
        let mut query = entity::prelude::Recipe::find();
        if let Some(game_id) = game_id {
            query = query.filter(entity::recipe::Column::GameId.eq(game_id));
        }

        let recipes = query
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await?;
        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = recipes.iter().map(|recipe| recipe.id).collect();

        let mut inputs: HashMap<i32, Vec<entity::recipe_input::Model>> = HashMap::new();
        for row in entity::prelude::RecipeInput::find()
            .filter(entity::recipe_input::Column::RecipeId.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
        {
            inputs.entry(row.recipe_id).or_default().push(row);
        }

        let mut outputs: HashMap<i32, Vec<entity::recipe_output::Model>> = HashMap::new();
        for row in entity::prelude::RecipeOutput::find()
            .filter(entity::recipe_output::Column::RecipeId.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
        {
            outputs.entry(row.recipe_id).or_default().push(row);
        }

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let recipe_inputs = inputs.remove(&recipe.id).unwrap_or_default();
                let recipe_outputs = outputs.remove(&recipe.id).unwrap_or_default();
                Recipe::from_entity(recipe, recipe_inputs, recipe_outputs)
            })
            .collect())
    }

    /// Returns the subset of `ids` that has no recipe row.
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<i32> = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|recipe| recipe.id)
            .collect();

        let mut missing: Vec<i32> = ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();

        Ok(missing)
    }

    /// Updates the game of a recipe and replaces its inputs and outputs wholesale.
    ///
    /// # Returns
    /// - `Ok(Some(Recipe))` - The updated recipe
    /// - `Ok(None)` - No recipe with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: RecipeParam) -> Result<Option<Recipe>, DbErr> {
        let Some(recipe) = entity::prelude::Recipe::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::recipe::ActiveModel = recipe.into();
        active_model.game_id = ActiveValue::Set(param.game_id);
        let recipe = active_model.update(self.db).await?;

        self.delete_amounts(id).await?;
        self.insert_amounts(id, &param.input, &param.output).await?;

        Ok(Some(self.hydrate_one(recipe).await?))
    }

    /// Deletes a recipe with its amount rows.
    ///
    /// Group item preferences that chose this recipe keep their row with the recipe
    /// cleared, so the viewer's explicit choice becomes "no recipe".
    ///
    /// # Returns
    /// - `Ok(true)` - Recipe deleted
    /// - `Ok(false)` - No recipe with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::GroupItemPreference::update_many()
            .filter(entity::group_item_preference::Column::RecipeId.eq(id))
            .col_expr(
                entity::group_item_preference::Column::RecipeId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .exec(self.db)
            .await?;

        self.delete_amounts(id).await?;

        let result = entity::prelude::Recipe::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_amounts(&self, recipe_id: i32) -> Result<(), DbErr> {
        entity::prelude::RecipeInput::delete_many()
            .filter(entity::recipe_input::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        entity::prelude::RecipeOutput::delete_many()
            .filter(entity::recipe_output::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn insert_amounts(
        &self,
        recipe_id: i32,
        input: &[RecipeAmount],
        output: &[RecipeAmount],
    ) -> Result<(), DbErr> {
        for amount in input {
            entity::recipe_input::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                item_id: ActiveValue::Set(amount.item_id),
                amount: ActiveValue::Set(amount.amount),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for amount in output {
            entity::recipe_output::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                item_id: ActiveValue::Set(amount.item_id),
                amount: ActiveValue::Set(amount.amount),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    async fn hydrate_one(&self, recipe: entity::recipe::Model) -> Result<Recipe, DbErr> {
        let inputs = entity::prelude::RecipeInput::find()
            .filter(entity::recipe_input::Column::RecipeId.eq(recipe.id))
            .all(self.db)
            .await?;
        let outputs = entity::prelude::RecipeOutput::find()
            .filter(entity::recipe_output::Column::RecipeId.eq(recipe.id))
            .all(self.db)
            .await?;

        Ok(Recipe::from_entity(recipe, inputs, outputs))
    }
}
