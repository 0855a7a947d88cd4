//! Collection factories for creating collections, groups, item amounts and
//! per-user preference rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test collections.
pub struct CollectionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    game_id: i32,
    name: String,
}

impl<'a> CollectionFactory<'a> {
    /// Creates a new CollectionFactory named `"Collection {id}"`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user
    /// - `game_id` - Id of the game the collection tracks
    pub fn new(db: &'a DatabaseConnection, user_id: i32, game_id: i32) -> Self {
        Self {
            db,
            user_id,
            game_id,
            name: format!("Collection {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the collection entity into the database.
    pub async fn build(self) -> Result<entity::collection::Model, DbErr> {
        entity::collection::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a collection with a default name.
pub async fn create_collection(
    db: &DatabaseConnection,
    user_id: i32,
    game_id: i32,
) -> Result<entity::collection::Model, DbErr> {
    CollectionFactory::new(db, user_id, game_id).build().await
}

/// Creates an empty group named `"Group {id}"` inside a collection.
pub async fn create_group(
    db: &DatabaseConnection,
    collection_id: i32,
) -> Result<entity::collection_group::Model, DbErr> {
    entity::collection_group::ActiveModel {
        collection_id: ActiveValue::Set(collection_id),
        name: ActiveValue::Set(format!("Group {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an item amount row for `(group_id, item_id)`.
pub async fn create_item_amount(
    db: &DatabaseConnection,
    group_id: i32,
    item_id: i32,
    amount: i32,
) -> Result<entity::collection_item_amount::Model, DbErr> {
    entity::collection_item_amount::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        item_id: ActiveValue::Set(item_id),
        amount: ActiveValue::Set(amount),
    }
    .insert(db)
    .await
}

/// Creates a group preference row for `(group_id, user_id)`.
pub async fn create_group_preference(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
    cost_reduction: f32,
) -> Result<entity::group_preference::Model, DbErr> {
    entity::group_preference::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        user_id: ActiveValue::Set(user_id),
        show_base_ingredients: ActiveValue::Set(false),
        collapse_ingredients: ActiveValue::Set(true),
        cost_reduction: ActiveValue::Set(cost_reduction),
    }
    .insert(db)
    .await
}

/// Creates a recipe override row for `(group_id, user_id, item_id)`.
pub async fn create_group_item_preference(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
    item_id: i32,
    recipe_id: Option<i32>,
) -> Result<entity::group_item_preference::Model, DbErr> {
    entity::group_item_preference::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        user_id: ActiveValue::Set(user_id),
        item_id: ActiveValue::Set(item_id),
        recipe_id: ActiveValue::Set(recipe_id),
    }
    .insert(db)
    .await
}
