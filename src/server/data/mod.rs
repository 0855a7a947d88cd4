//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait`, so services can run the same
//! queries on the connection pool or inside an open transaction.

pub mod backup;
pub mod collection;
pub mod game;
pub mod image;
pub mod item;
pub mod item_category;
pub mod recipe;
pub mod user;
