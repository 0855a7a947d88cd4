use sea_orm::ConnectionTrait;

use crate::server::{
    data::item_category::ItemCategoryRepository,
    error::{AppError, EntityKind},
    model::item::ItemCategory,
};

pub struct ItemCategoryService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemCategoryService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a category shared by every game.
    ///
    /// # Returns
    /// - `Ok(ItemCategory)` - The new category
    /// - `Err(AppError::BadRequest)` - The name is blank
    pub async fn create(&self, name: String) -> Result<ItemCategory, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Item category name must not be empty".to_string(),
            ));
        }

        let category = ItemCategoryRepository::new(self.db).create(name).await?;

        tracing::info!("Created item category {} ({})", category.id, category.name);

        Ok(category)
    }

    pub async fn get_all(&self) -> Result<Vec<ItemCategory>, AppError> {
        Ok(ItemCategoryRepository::new(self.db).get_all().await?)
    }
}

/// Fails with `NotFound` naming the lowest category id that has no row.
pub(crate) async fn ensure_categories_exist<C: ConnectionTrait>(
    db: &C,
    category_ids: &[i32],
) -> Result<(), AppError> {
    if let Some(missing) = ItemCategoryRepository::new(db)
        .find_missing(category_ids)
        .await?
        .first()
    {
        return Err(AppError::not_found(EntityKind::ItemCategory, *missing));
    }

    Ok(())
}
