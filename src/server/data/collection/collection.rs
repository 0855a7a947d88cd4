use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{data::collection::GroupRepository, model::collection::Collection};

/// Repository for collection rows.
pub struct CollectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        game_id: i32,
        name: String,
    ) -> Result<entity::collection::Model, DbErr> {
        entity::collection::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::collection::Model>, DbErr> {
        entity::prelude::Collection::find_by_id(id).one(self.db).await
    }

    /// Gets the collections of one owner, optionally restricted to one game.
    pub async fn get_by_owner(
        &self,
        user_id: i32,
        game_id: Option<i32>,
    ) -> Result<Vec<entity::collection::Model>, DbErr> {
        let mut query = entity::prelude::Collection::find()
            .filter(entity::collection::Column::UserId.eq(user_id));
        if let Some(game_id) = game_id {
            query = query.filter(entity::collection::Column::GameId.eq(game_id));
        }

        query
            .order_by_asc(entity::collection::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::collection::Model>, DbErr> {
        entity::prelude::Collection::find()
            .order_by_asc(entity::collection::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a collection and moves it to `game_id` when one is given.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated collection
    /// - `Ok(None)` - No collection with that id
    pub async fn update(
        &self,
        id: i32,
        name: String,
        game_id: Option<i32>,
    ) -> Result<Option<entity::collection::Model>, DbErr> {
        let Some(collection) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::collection::ActiveModel = collection.into();
        active_model.name = ActiveValue::Set(name);
        if let Some(game_id) = game_id {
            active_model.game_id = ActiveValue::Set(game_id);
        }

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a collection row. Its groups must already be gone.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Collection::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Hydrates collections with all their groups for one viewer.
    pub async fn hydrate(
        &self,
        collections: Vec<entity::collection::Model>,
        viewer_id: i32,
    ) -> Result<Vec<Collection>, DbErr> {
        let collection_ids: Vec<i32> = collections.iter().map(|c| c.id).collect();

        let group_repo = GroupRepository::new(self.db);
        let groups = group_repo.get_by_collections(&collection_ids).await?;
        let hydrated = group_repo.hydrate(&groups, viewer_id).await?;

        let mut by_collection: HashMap<i32, Vec<_>> = HashMap::new();
        for group in hydrated {
            by_collection
                .entry(group.collection_id)
                .or_default()
                .push(group);
        }

        Ok(collections
            .into_iter()
            .map(|collection| {
                let groups = by_collection.remove(&collection.id).unwrap_or_default();
                Collection::from_entity(collection, groups)
            })
            .collect())
    }
}
