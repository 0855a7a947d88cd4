//! Item category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an item category named `"Category {id}"`.
pub async fn create_item_category(
    db: &DatabaseConnection,
) -> Result<entity::item_category::Model, DbErr> {
    create_named_item_category(db, format!("Category {}", next_id())).await
}

/// Creates an item category with the given name.
pub async fn create_named_item_category(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::item_category::Model, DbErr> {
    entity::item_category::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
