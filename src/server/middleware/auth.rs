//! Bearer token extraction and role checks for API handlers.
//!
//! Handlers take a [`BearerToken`] extractor and call [`AuthGuard::require`] with the
//! roles allowed to use the endpoint. The guard validates the token, reloads the user
//! and rejects unverified accounts before checking the role list.

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use sea_orm::ConnectionTrait;

use crate::server::{
    auth::jwt::{self, TokenType},
    config::JwtConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
};

/// Raw token from an `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        Ok(Self(token.to_string()))
    }
}

pub struct AuthGuard<'a, C: ConnectionTrait> {
    db: &'a C,
    jwt: &'a JwtConfig,
    token: &'a BearerToken,
}

impl<'a, C: ConnectionTrait> AuthGuard<'a, C> {
    pub fn new(db: &'a C, jwt: &'a JwtConfig, token: &'a BearerToken) -> Self {
        Self { db, jwt, token }
    }

    /// Authenticates the request and checks the user's role.
    ///
    /// # Arguments
    /// - `roles` - Roles allowed to proceed; an empty slice admits every verified user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::Unverified)` - User has not been verified yet
    /// - `Err(AuthError::AccessDenied)` - User's role is not in `roles`
    /// - `Err(AuthError)` - Token invalid, not an access token, or user gone
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let user = self.authenticate().await?;

        if user.role == Role::Unverified {
            return Err(AuthError::Unverified(user.id).into());
        }

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!(
                    "Role {} is not one of {:?}",
                    user.role,
                    roles.iter().map(Role::as_str).collect::<Vec<_>>()
                ),
            )
            .into());
        }

        Ok(user)
    }

    /// Authenticates the request without rejecting unverified users.
    pub async fn require_any_status(&self) -> Result<User, AppError> {
        self.authenticate().await
    }

    async fn authenticate(&self) -> Result<User, AppError> {
        let claims = jwt::validate_token(&self.token.0, self.jwt)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if claims.token_type != TokenType::AccessToken {
            return Err(AuthError::WrongTokenType(claims.token_type.as_str().to_string()).into());
        }

        let user = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .filter(|user| user.user_name == claims.user_name)
            .ok_or(AuthError::UserNotInDatabase(claims.sub))?;

        Ok(user)
    }
}
