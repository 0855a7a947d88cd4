//! Item factory for creating test item entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items belonging to a game.
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    name: String,
    image_id: Option<i32>,
    category_ids: Vec<i32>,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory named `"Item {id}"` for the given game.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `game_id` - Id of an existing game
    pub fn new(db: &'a DatabaseConnection, game_id: i32) -> Self {
        Self {
            db,
            game_id,
            name: format!("Item {}", next_id()),
            image_id: None,
            category_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn image(mut self, image_id: i32) -> Self {
        self.image_id = Some(image_id);
        self
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_ids.push(category_id);
        self
    }

    /// Builds and inserts the item entity and its category links.
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        let item = entity::item::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            name: ActiveValue::Set(self.name),
            image_id: ActiveValue::Set(self.image_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for category_id in self.category_ids {
            entity::item_item_category::ActiveModel {
                item_id: ActiveValue::Set(item.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(item)
    }
}

/// Creates an item with default values for the given game.
pub async fn create_item(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, game_id).build().await
}
