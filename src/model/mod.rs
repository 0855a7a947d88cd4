//! Request and response bodies exchanged over the REST API.
//!
//! DTOs are plain serde types with camelCase field names. Server-side domain models
//! convert into these at the controller boundary.

pub mod api;
pub mod backup;
pub mod collection;
pub mod game;
pub mod image;
pub mod item;
pub mod recipe;
pub mod user;
