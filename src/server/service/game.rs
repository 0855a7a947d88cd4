//! Game catalog service.
//!
//! Writes run in a transaction because a game spans the game row and its category links.

use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::server::{
    data::game::GameRepository,
    error::{AppError, EntityKind},
    model::game::{Game, GameParam},
    service::{image::ensure_images_exist, item_category::ensure_categories_exist},
};

pub struct GameService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> GameService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a game with its item categories and images.
    ///
    /// # Returns
    /// - `Ok(Game)` - The new game
    /// - `Err(AppError::NotFound)` - A category or image does not exist
    pub async fn create(&self, param: GameParam) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;

        validate_references(&txn, &param).await?;
        let game = GameRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!("Created game {} ({})", game.id, game.name);

        Ok(game)
    }

    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Game, id))
    }

    /// Updates a game. The category list replaces the previous one.
    pub async fn update(&self, id: i32, param: GameParam) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;

        validate_references(&txn, &param).await?;
        let game = GameRepository::new(&txn)
            .update(id, param)
            .await?
            .ok_or(AppError::not_found(EntityKind::Game, id))?;

        txn.commit().await?;

        Ok(game)
    }

    /// Deletes a game that nothing references anymore.
    ///
    /// # Returns
    /// - `Ok(())` - Game and its category links deleted
    /// - `Err(AppError::NotFound)` - No game with that id
    /// - `Err(AppError::BadRequest)` - Items, recipes or collections still use the game
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = GameRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::Game, id));
        }
        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(format!(
                "Game {} still has items, recipes or collections",
                id
            )));
        }

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted game {}", id);

        Ok(())
    }
}

async fn validate_references<C: ConnectionTrait>(
    db: &C,
    param: &GameParam,
) -> Result<(), AppError> {
    ensure_categories_exist(db, &param.item_category_ids).await?;
    ensure_images_exist(db, &param.image_ids()).await
}
