//! Item data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::item_category::ItemCategoryRepository,
    model::item::{Item, ItemParam},
};

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an item and links its categories.
    pub async fn create(&self, param: ItemParam) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            game_id: ActiveValue::Set(param.game_id),
            name: ActiveValue::Set(param.name),
            image_id: ActiveValue::Set(param.image_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let categories = ItemCategoryRepository::new(self.db);
        categories
            .replace_item_categories(entity.id, &param.category_ids)
            .await?;
        let mut linked = categories.get_by_items(&[entity.id]).await?;
        let item_categories = linked.remove(&entity.id).unwrap_or_default();

        Ok(Item::from_entity(entity, item_categories))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let Some(entity) = entity::prelude::Item::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    /// Gets items ordered by id, optionally restricted to one game.
    pub async fn get_all(&self, game_id: Option<i32>) -> Result<Vec<Item>, DbErr> {
        let mut query = entity::prelude::Item::find();
        if let Some(game_id) = game_id {
            query = query.filter(entity::item::Column::GameId.eq(game_id));
        }

        let entities = query
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Returns the subset of `ids` that has no item row.
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<i32> = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|item| item.id)
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

    /// Updates an item, replacing its categories.
    ///
    /// # Returns
    /// - `Ok(Some(Item))` - The updated item
    /// - `Ok(None)` - No item with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: ItemParam) -> Result<Option<Item>, DbErr> {
        let Some(item) = entity::prelude::Item::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::item::ActiveModel = item.into();
        active_model.game_id = ActiveValue::Set(param.game_id);
        active_model.name = ActiveValue::Set(param.name);
        active_model.image_id = ActiveValue::Set(param.image_id);
        active_model.update(self.db).await?;

        ItemCategoryRepository::new(self.db)
            .replace_item_categories(id, &param.category_ids)
            .await?;

        self.find_by_id(id).await
    }

    /// Deletes an item row and its category links.
    ///
    /// # Returns
    /// - `Ok(true)` - Item deleted
    /// - `Ok(false)` - No item with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        ItemCategoryRepository::new(self.db)
            .delete_item_links(id)
            .await?;
        let result = entity::prelude::Item::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any recipe or collection row still references the item.
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let inputs = entity::prelude::RecipeInput::find()
            .filter(entity::recipe_input::Column::ItemId.eq(id))
            .count(self.db)
            .await?;
        let outputs = entity::prelude::RecipeOutput::find()
            .filter(entity::recipe_output::Column::ItemId.eq(id))
            .count(self.db)
            .await?;
        let amounts = entity::prelude::CollectionItemAmount::find()
            .filter(entity::collection_item_amount::Column::ItemId.eq(id))
            .count(self.db)
            .await?;
        let preferences = entity::prelude::GroupItemPreference::find()
            .filter(entity::group_item_preference::Column::ItemId.eq(id))
            .count(self.db)
            .await?;

        Ok(inputs + outputs + amounts + preferences > 0)
    }

    /// Attaches categories to item rows, keeping their order.
    async fn hydrate(&self, entities: Vec<entity::item::Model>) -> Result<Vec<Item>, DbErr> {
        let ids: Vec<i32> = entities.iter().map(|item| item.id).collect();
        let mut linked = ItemCategoryRepository::new(self.db)
            .get_by_items(&ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|item| {
                let categories = linked.remove(&item.id).unwrap_or_default();
                Item::from_entity(item, categories)
            })
            .collect())
    }
}
