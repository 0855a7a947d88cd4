//! Item category repository and the game and item category links.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::item::ItemCategory;

pub struct ItemCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<ItemCategory, DbErr> {
        let entity = entity::item_category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ItemCategory::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<ItemCategory>, DbErr> {
        let entities = entity::prelude::ItemCategory::find()
            .order_by_asc(entity::item_category::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ItemCategory::from_entity).collect())
    }

    /// Returns the subset of `ids` that has no category row.
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<i32> = entity::prelude::ItemCategory::find()
            .filter(entity::item_category::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|category| category.id)
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

    /// Gets the categories linked to each of the given games, ordered by category id.
    ///
    /// Games without categories have no entry in the map.
    pub async fn get_by_games(
        &self,
        game_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<ItemCategory>>, DbErr> {
        if game_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::GameItemCategory::find()
            .filter(entity::game_item_category::Column::GameId.is_in(game_ids.iter().copied()))
            .order_by_asc(entity::game_item_category::Column::CategoryId)
            .find_also_related(entity::prelude::ItemCategory)
            .all(self.db)
            .await?;

        let mut categories: HashMap<i32, Vec<ItemCategory>> = HashMap::new();
        for (link, category) in rows {
            if let Some(category) = category {
                categories
                    .entry(link.game_id)
                    .or_default()
                    .push(ItemCategory::from_entity(category));
            }
        }

        Ok(categories)
    }

    /// Gets the categories linked to each of the given items, ordered by category id.
    pub async fn get_by_items(
        &self,
        item_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<ItemCategory>>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ItemItemCategory::find()
            .filter(entity::item_item_category::Column::ItemId.is_in(item_ids.iter().copied()))
            .order_by_asc(entity::item_item_category::Column::CategoryId)
            .find_also_related(entity::prelude::ItemCategory)
            .all(self.db)
            .await?;

        let mut categories: HashMap<i32, Vec<ItemCategory>> = HashMap::new();
        for (link, category) in rows {
            if let Some(category) = category {
                categories
                    .entry(link.item_id)
                    .or_default()
                    .push(ItemCategory::from_entity(category));
            }
        }

        Ok(categories)
    }

    /// Replaces every category link of a game.
    pub async fn replace_game_categories(
        &self,
        game_id: i32,
        category_ids: &[i32],
    ) -> Result<(), DbErr> {
        self.delete_game_links(game_id).await?;

        let mut category_ids = category_ids.to_vec();
        category_ids.sort_unstable();
        category_ids.dedup();

        for category_id in category_ids {
            entity::game_item_category::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces every category link of an item.
    pub async fn replace_item_categories(
        &self,
        item_id: i32,
        category_ids: &[i32],
    ) -> Result<(), DbErr> {
        self.delete_item_links(item_id).await?;

        let mut category_ids = category_ids.to_vec();
        category_ids.sort_unstable();
        category_ids.dedup();

        for category_id in category_ids {
            entity::item_item_category::ActiveModel {
                item_id: ActiveValue::Set(item_id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn delete_game_links(&self, game_id: i32) -> Result<(), DbErr> {
        entity::prelude::GameItemCategory::delete_many()
            .filter(entity::game_item_category::Column::GameId.eq(game_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_item_links(&self, item_id: i32) -> Result<(), DbErr> {
        entity::prelude::ItemItemCategory::delete_many()
            .filter(entity::item_item_category::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
