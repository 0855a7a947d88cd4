//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, checks ownership where the
//! resource belongs to a user, converts the request DTO into service parameters and
//! converts the returned domain model back into a DTO.

pub mod auth;
pub mod backup;
pub mod collection;
pub mod game;
pub mod image;
pub mod item;
pub mod recipe;
pub mod user;
