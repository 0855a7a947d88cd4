use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::item_category::ItemCategoryRepository,
    model::game::{Game, GameParam},
};

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a game and links its item categories.
    ///
    /// Category ids must exist; the service checks them first.
    pub async fn create(&self, param: GameParam) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            name: ActiveValue::Set(param.name),
            icon_id: ActiveValue::Set(param.icon_id),
            banner_id: ActiveValue::Set(param.banner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let categories = ItemCategoryRepository::new(self.db);
        categories
            .replace_game_categories(entity.id, &param.item_category_ids)
            .await?;
        let mut linked = categories.get_by_games(&[entity.id]).await?;
        let item_categories = linked.remove(&entity.id).unwrap_or_default();

        Ok(Game::from_entity(entity, item_categories))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut linked = ItemCategoryRepository::new(self.db)
            .get_by_games(&[id])
            .await?;

        Ok(Some(Game::from_entity(
            entity,
            linked.remove(&id).unwrap_or_default(),
        )))
    }

    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|game| game.id).collect();
        let mut linked = ItemCategoryRepository::new(self.db)
            .get_by_games(&ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|game| {
                let categories = linked.remove(&game.id).unwrap_or_default();
                Game::from_entity(game, categories)
            })
            .collect())
    }

    /// Updates a game, replacing its item categories.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: GameParam) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = game.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.icon_id = ActiveValue::Set(param.icon_id);
        active_model.banner_id = ActiveValue::Set(param.banner_id);
        active_model.update(self.db).await?;

        ItemCategoryRepository::new(self.db)
            .replace_game_categories(id, &param.item_category_ids)
            .await?;

        self.find_by_id(id).await
    }

    /// Deletes a game row and its category links.
    ///
    /// # Returns
    /// - `Ok(true)` - Game deleted
    /// - `Ok(false)` - No game with that id
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        ItemCategoryRepository::new(self.db)
            .delete_game_links(id)
            .await?;
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any item, recipe or collection still belongs to the game.
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let items = entity::prelude::Item::find()
            .filter(entity::item::Column::GameId.eq(id))
            .count(self.db)
            .await?;
        let recipes = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::GameId.eq(id))
            .count(self.db)
            .await?;
        let collections = entity::prelude::Collection::find()
            .filter(entity::collection::Column::GameId.eq(id))
            .count(self.db)
            .await?;

        Ok(items + recipes + collections > 0)
    }
}
