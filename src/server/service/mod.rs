//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes inside one transaction

pub mod backup;
pub mod collection;
pub mod game;
pub mod image;
pub mod item;
pub mod item_category;
pub mod recipe;
pub mod user;

#[cfg(test)]
mod test;
