//! Table-wide operations used when restoring a backup.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct BackupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BackupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes every row of every application table, children before parents.
    pub async fn clear_all(&self) -> Result<(), DbErr> {
        entity::prelude::GroupItemPreference::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::GroupPreference::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::CollectionItemAmount::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::CollectionGroup::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::Collection::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::RecipeInput::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::RecipeOutput::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::Recipe::delete_many().exec(self.db).await?;
        entity::prelude::ItemItemCategory::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::GameItemCategory::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::Item::delete_many().exec(self.db).await?;
        entity::prelude::Game::delete_many().exec(self.db).await?;
        entity::prelude::ItemCategory::delete_many()
            .exec(self.db)
            .await?;
        entity::prelude::Image::delete_many().exec(self.db).await?;
        entity::prelude::User::delete_many().exec(self.db).await?;

        Ok(())
    }
}
