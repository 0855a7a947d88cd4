//! User domain models and parameters.
//!
//! Provides the user model with its role, the role enum used for access checks, and
//! parameter types for registration and account changes.

use std::fmt;

use crate::model::user::UserDto;

/// Access level of a user.
///
/// Newly registered users start as `Unverified` and cannot use the API beyond
/// reading their own account until an admin assigns another role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Contributor,
    User,
    Unverified,
}

impl Role {
    /// Name stored in the `user.role` column and exposed over the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Contributor => "Contributor",
            Self::User => "User",
            Self::Unverified => "Unverified",
        }
    }

    /// Parses a stored or requested role name. Matching is exact.
    ///
    /// # Returns
    /// - `Some(Role)` - Known role name
    /// - `None` - Unknown role name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Admin" => Some(Self::Admin),
            "Contributor" => Some(Self::Contributor),
            "User" => Some(Self::User),
            "Unverified" => Some(Self::Unverified),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Unknown role names in the database are treated as `Unverified` so that a
    /// corrupted row never grants access.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_name(&entity.role).unwrap_or(Role::Unverified),
        }
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Access and refresh tokens issued together.
#[derive(Debug, Clone, PartialEq)]
pub struct UserTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl UserTokens {
    pub fn into_dto(self) -> crate::model::user::UserTokensDto {
        crate::model::user::UserTokensDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        }
    }
}
