//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games.
///
/// Categories are linked through `game_item_category` after the game row is inserted.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    icon_id: Option<i32>,
    banner_id: Option<i32>,
    category_ids: Vec<i32>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory named `"Game {id}"` without images or categories.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Game {}", next_id()),
            icon_id: None,
            banner_id: None,
            category_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn icon(mut self, image_id: i32) -> Self {
        self.icon_id = Some(image_id);
        self
    }

    pub fn banner(mut self, image_id: i32) -> Self {
        self.banner_id = Some(image_id);
        self
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_ids.push(category_id);
        self
    }

    /// Builds and inserts the game entity and its category links.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let game = entity::game::ActiveModel {
            name: ActiveValue::Set(self.name),
            icon_id: ActiveValue::Set(self.icon_id),
            banner_id: ActiveValue::Set(self.banner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for category_id in self.category_ids {
            entity::game_item_category::ActiveModel {
                game_id: ActiveValue::Set(game.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(game)
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
