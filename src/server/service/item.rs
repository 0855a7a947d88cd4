//! Item catalog service.

use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::server::{
    data::{game::GameRepository, item::ItemRepository},
    error::{AppError, EntityKind},
    model::item::{Item, ItemParam},
    service::{image::ensure_images_exist, item_category::ensure_categories_exist},
};

pub struct ItemService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> ItemService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an item for an existing game.
    ///
    /// # Returns
    /// - `Ok(Item)` - The new item with its categories
    /// - `Err(AppError::NotFound)` - The game, a category or the image does not exist
    pub async fn create(&self, param: ItemParam) -> Result<Item, AppError> {
        let txn = self.db.begin().await?;

        validate_references(&txn, &param).await?;
        let item = ItemRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!("Created item {} for game {}", item.id, item.game_id);

        Ok(item)
    }

    pub async fn get_all(&self, game_id: Option<i32>) -> Result<Vec<Item>, AppError> {
        Ok(ItemRepository::new(self.db).get_all(game_id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Item, AppError> {
        ItemRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Item, id))
    }

    pub async fn update(&self, id: i32, param: ItemParam) -> Result<Item, AppError> {
        let txn = self.db.begin().await?;

        validate_references(&txn, &param).await?;
        let item = ItemRepository::new(&txn)
            .update(id, param)
            .await?
            .ok_or(AppError::not_found(EntityKind::Item, id))?;

        txn.commit().await?;

        Ok(item)
    }

    /// Deletes an item no recipe or collection uses.
    ///
    /// # Returns
    /// - `Ok(())` - Item and its category links deleted
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(AppError::BadRequest)` - The item is still referenced
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ItemRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::Item, id));
        }
        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(format!(
                "Item {} is still used by recipes or collections",
                id
            )));
        }

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted item {}", id);

        Ok(())
    }
}

async fn validate_references<C: ConnectionTrait>(
    db: &C,
    param: &ItemParam,
) -> Result<(), AppError> {
    if GameRepository::new(db)
        .find_by_id(param.game_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found(EntityKind::Game, param.game_id));
    }

    ensure_categories_exist(db, &param.category_ids).await?;
    let image_ids: Vec<i32> = param.image_id.into_iter().collect();
    ensure_images_exist(db, &image_ids).await
}
