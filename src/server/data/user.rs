//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups by id, name and email, and role and password
//! changes with conversion between entity models and domain models at the boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::user::{CreateUserParam, Role, User};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the same queries run on the pool or inside a
/// transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// # Arguments
    /// - `param` - User name, email, password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            user_name: ActiveValue::Set(param.user_name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their unique user name.
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their unique email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets every user ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets the role of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_role(&self, id: i32, role: Role) -> Result<User, DbErr> {
        let mut active_model: entity::user::ActiveModel = self.find_entity(id).await?.into();
        active_model.role = ActiveValue::Set(role.as_str().to_string());

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Replaces the stored password hash of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password_hash(&self, id: i32, password_hash: String) -> Result<User, DbErr> {
        let mut active_model: entity::user::ActiveModel = self.find_entity(id).await?.into();
        active_model.password_hash = ActiveValue::Set(password_hash);

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    async fn find_entity(&self, id: i32) -> Result<entity::user::Model, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )))
    }
}
