//! Group repository.
//!
//! Groups own their item amounts and every user's preference rows for them. Reads
//! return groups hydrated for one viewing user through [`project_group`].

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::collection::{ItemAmountRepository, PreferenceRepository},
    model::collection::{project_group, Group},
};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        collection_id: i32,
        name: String,
    ) -> Result<entity::collection_group::Model, DbErr> {
        entity::collection_group::ActiveModel {
            collection_id: ActiveValue::Set(collection_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::collection_group::Model>, DbErr> {
        entity::prelude::CollectionGroup::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the groups of the listed collections in creation order.
    pub async fn get_by_collections(
        &self,
        collection_ids: &[i32],
    ) -> Result<Vec<entity::collection_group::Model>, DbErr> {
        if collection_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CollectionGroup::find()
            .filter(
                entity::collection_group::Column::CollectionId
                    .is_in(collection_ids.iter().copied()),
            )
            .order_by_asc(entity::collection_group::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a group.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The renamed group
    /// - `Ok(None)` - No group with that id
    pub async fn rename(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::collection_group::Model>, DbErr> {
        let Some(group) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::collection_group::ActiveModel = group.into();
        active_model.name = ActiveValue::Set(name);

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes groups together with their item amounts and every user's preferences.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of group rows deleted
    /// - `Err(DbErr)` - Database error during any of the deletes
    pub async fn delete_cascade(&self, group_ids: &[i32]) -> Result<u64, DbErr> {
        if group_ids.is_empty() {
            return Ok(0);
        }

        PreferenceRepository::new(self.db)
            .delete_by_groups(group_ids)
            .await?;
        ItemAmountRepository::new(self.db)
            .delete_by_groups(group_ids)
            .await?;

        let result = entity::prelude::CollectionGroup::delete_many()
            .filter(entity::collection_group::Column::Id.is_in(group_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Hydrates groups for one viewer.
    ///
    /// Loads item amounts and the viewer's preference rows for all groups in three
    /// queries, then projects each group. Output order follows `groups`.
    pub async fn hydrate(
        &self,
        groups: &[entity::collection_group::Model],
        viewer_id: i32,
    ) -> Result<Vec<Group>, DbErr> {
        let group_ids: Vec<i32> = groups.iter().map(|group| group.id).collect();

        let amounts = ItemAmountRepository::new(self.db)
            .get_by_groups(&group_ids)
            .await?;

        let preference_repo = PreferenceRepository::new(self.db);
        let preferences: HashMap<i32, entity::group_preference::Model> = preference_repo
            .get_group_preferences(&group_ids, viewer_id)
            .await?
            .into_iter()
            .map(|row| (row.group_id, row))
            .collect();
        let item_preferences = preference_repo
            .get_item_preferences(&group_ids, viewer_id)
            .await?;

        Ok(groups
            .iter()
            .map(|group| {
                project_group(
                    group,
                    &amounts,
                    preferences.get(&group.id),
                    &item_preferences,
                )
            })
            .collect())
    }

    /// Hydrates a single group for one viewer.
    pub async fn hydrate_one(
        &self,
        group: &entity::collection_group::Model,
        viewer_id: i32,
    ) -> Result<Group, DbErr> {
        self.hydrate(std::slice::from_ref(group), viewer_id)
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!(
                "Group with id {} not found",
                group.id
            )))
    }
}
