//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let game = factory::game::create_game(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, game, item, collection, group) =
//!         factory::helpers::create_group_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .user_name("root")
//!     .role("Admin")
//!     .build()
//!     .await?;
//!
//! let recipe = factory::recipe::RecipeFactory::new(&db, game.id)
//!     .input(ore.id, 2)
//!     .output(ingot.id, 1)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `game` - Create game entities
//! - `item` - Create item entities
//! - `item_category` - Create item categories
//! - `image` - Create image metadata rows
//! - `recipe` - Create recipes with input/output amounts
//! - `collection` - Create collections, groups, item amounts and preference rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod collection;
pub mod game;
pub mod helpers;
pub mod image;
pub mod item;
pub mod item_category;
pub mod recipe;
pub mod user;

pub use collection::{create_collection, create_group, create_item_amount};
pub use game::create_game;
pub use image::create_image;
pub use item::create_item;
pub use item_category::create_item_category;
pub use recipe::create_recipe;
pub use user::create_user;
