//! Per-user group preference repository.
//!
//! Every read is keyed by the viewing user so one user's rows are never returned
//! while hydrating a group for another user. The only exception is
//! [`PreferenceRepository::get_all_group_preferences`], used for exports.

use std::collections::BTreeMap;

use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::collection::GroupPreferences;

pub struct PreferenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreferenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or overwrites the display preferences of `user_id` for a group.
    pub async fn upsert_group_preference(
        &self,
        group_id: i32,
        user_id: i32,
        preferences: GroupPreferences,
    ) -> Result<(), DbErr> {
        entity::prelude::GroupPreference::insert(entity::group_preference::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            user_id: ActiveValue::Set(user_id),
            show_base_ingredients: ActiveValue::Set(preferences.show_base_ingredients),
            collapse_ingredients: ActiveValue::Set(preferences.collapse_ingredients),
            cost_reduction: ActiveValue::Set(preferences.cost_reduction),
        })
        .on_conflict(
            OnConflict::columns([
                entity::group_preference::Column::GroupId,
                entity::group_preference::Column::UserId,
            ])
            .update_columns([
                entity::group_preference::Column::ShowBaseIngredients,
                entity::group_preference::Column::CollapseIngredients,
                entity::group_preference::Column::CostReduction,
            ])
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Replaces every item recipe choice of `user_id` for a group with `choices`.
    ///
    /// Existing rows are deleted before the new ones are written, so items left out
    /// of `choices` lose their recorded choice.
    pub async fn replace_item_preferences(
        &self,
        group_id: i32,
        user_id: i32,
        choices: &BTreeMap<i32, Option<i32>>,
    ) -> Result<(), DbErr> {
        entity::prelude::GroupItemPreference::delete_many()
            .filter(entity::group_item_preference::Column::GroupId.eq(group_id))
            .filter(entity::group_item_preference::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        for (item_id, recipe_id) in choices {
            entity::group_item_preference::ActiveModel {
                group_id: ActiveValue::Set(group_id),
                user_id: ActiveValue::Set(user_id),
                item_id: ActiveValue::Set(*item_id),
                recipe_id: ActiveValue::Set(*recipe_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Gets the display preference rows of one user for the listed groups.
    pub async fn get_group_preferences(
        &self,
        group_ids: &[i32],
        user_id: i32,
    ) -> Result<Vec<entity::group_preference::Model>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GroupPreference::find()
            .filter(entity::group_preference::Column::GroupId.is_in(group_ids.iter().copied()))
            .filter(entity::group_preference::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Gets the item recipe choices of one user for the listed groups.
    pub async fn get_item_preferences(
        &self,
        group_ids: &[i32],
        user_id: i32,
    ) -> Result<Vec<entity::group_item_preference::Model>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GroupItemPreference::find()
            .filter(
                entity::group_item_preference::Column::GroupId.is_in(group_ids.iter().copied()),
            )
            .filter(entity::group_item_preference::Column::UserId.eq(user_id))
            .order_by_asc(entity::group_item_preference::Column::ItemId)
            .all(self.db)
            .await
    }

    /// Gets every display preference row of every user.
    pub async fn get_all_group_preferences(
        &self,
    ) -> Result<Vec<entity::group_preference::Model>, DbErr> {
        entity::prelude::GroupPreference::find()
            .order_by_asc(entity::group_preference::Column::GroupId)
            .order_by_asc(entity::group_preference::Column::UserId)
            .all(self.db)
            .await
    }

    /// Deletes the preference rows of every user for the listed groups.
    pub async fn delete_by_groups(&self, group_ids: &[i32]) -> Result<(), DbErr> {
        if group_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::GroupItemPreference::delete_many()
            .filter(
                entity::group_item_preference::Column::GroupId.is_in(group_ids.iter().copied()),
            )
            .exec(self.db)
            .await?;

        entity::prelude::GroupPreference::delete_many()
            .filter(entity::group_preference::Column::GroupId.is_in(group_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
