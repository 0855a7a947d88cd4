use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Game, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Game)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared by the entity's relations.
    /// Tables should be added in dependency order (tables with foreign keys after the
    /// tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table and every catalog table.
    ///
    /// Adds, in dependency order:
    /// - Image
    /// - ItemCategory
    /// - User
    /// - Game
    /// - GameItemCategory
    /// - Item
    /// - ItemItemCategory
    /// - Recipe
    /// - RecipeInput
    /// - RecipeOutput
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Image)
            .with_table(ItemCategory)
            .with_table(User)
            .with_table(Game)
            .with_table(GameItemCategory)
            .with_table(Item)
            .with_table(ItemItemCategory)
            .with_table(Recipe)
            .with_table(RecipeInput)
            .with_table(RecipeOutput)
    }

    /// Adds all tables required for collection operations.
    ///
    /// Equivalent to `with_catalog_tables()` followed by the collection tables:
    /// - Collection
    /// - CollectionGroup
    /// - CollectionItemAmount
    /// - GroupPreference
    /// - GroupItemPreference
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_collection_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_collection_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Collection)
            .with_table(CollectionGroup)
            .with_table(CollectionItemAmount)
            .with_table(GroupPreference)
            .with_table(GroupItemPreference)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
