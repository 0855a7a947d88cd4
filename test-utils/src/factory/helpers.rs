//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a collection group with everything it depends on.
///
/// This is a convenience method that creates:
/// 1. User (collection owner)
/// 2. Game
/// 3. Item belonging to the game
/// 4. Collection owned by the user for the game
/// 5. Group inside the collection (without item amounts)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, game, item, collection, group))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::game::Model,
        entity::item::Model,
        entity::collection::Model,
        entity::collection_group::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let game = crate::factory::game::create_game(db).await?;
    let item = crate::factory::item::create_item(db, game.id).await?;
    let collection = crate::factory::collection::create_collection(db, user.id, game.id).await?;
    let group = crate::factory::collection::create_group(db, collection.id).await?;

    Ok((user, game, item, collection, group))
}
