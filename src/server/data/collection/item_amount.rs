use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository for the shared item amounts of groups.
pub struct ItemAmountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemAmountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the amount for (group, item) or overwrites the existing one.
    pub async fn upsert(&self, group_id: i32, item_id: i32, amount: i32) -> Result<(), DbErr> {
        entity::prelude::CollectionItemAmount::insert(entity::collection_item_amount::ActiveModel {
            group_id: sea_orm::ActiveValue::Set(group_id),
            item_id: sea_orm::ActiveValue::Set(item_id),
            amount: sea_orm::ActiveValue::Set(amount),
        })
        .on_conflict(
            OnConflict::columns([
                entity::collection_item_amount::Column::GroupId,
                entity::collection_item_amount::Column::ItemId,
            ])
            .update_column(entity::collection_item_amount::Column::Amount)
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the amount for (group, item).
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - The group had no amount for that item
    pub async fn delete(&self, group_id: i32, item_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CollectionItemAmount::delete_many()
            .filter(entity::collection_item_amount::Column::GroupId.eq(group_id))
            .filter(entity::collection_item_amount::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_groups(&self, group_ids: &[i32]) -> Result<u64, DbErr> {
        if group_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CollectionItemAmount::delete_many()
            .filter(
                entity::collection_item_amount::Column::GroupId.is_in(group_ids.iter().copied()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the amount rows of every listed group, ordered by group then item.
    pub async fn get_by_groups(
        &self,
        group_ids: &[i32],
    ) -> Result<Vec<entity::collection_item_amount::Model>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CollectionItemAmount::find()
            .filter(
                entity::collection_item_amount::Column::GroupId.is_in(group_ids.iter().copied()),
            )
            .order_by_asc(entity::collection_item_amount::Column::GroupId)
            .order_by_asc(entity::collection_item_amount::Column::ItemId)
            .all(self.db)
            .await
    }
}
