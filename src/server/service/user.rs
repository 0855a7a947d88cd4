//! User accounts and authentication.
//!
//! Handles registration, login, token refresh and the admin operations on accounts.
//! The configured super admin is created on startup by [`UserService::ensure_super_admin`]
//! and its role cannot be changed afterwards.

use sea_orm::ConnectionTrait;

use crate::server::{
    auth::{
        jwt::{self, TokenType},
        password,
    },
    config::{AdminConfig, JwtConfig},
    data::user::UserRepository,
    error::{auth::AuthError, AppError, EntityKind},
    model::user::{CreateUserParam, Role, User, UserTokens},
};

pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
    jwt: &'a JwtConfig,
    admin: &'a AdminConfig,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    pub fn new(db: &'a C, jwt: &'a JwtConfig, admin: &'a AdminConfig) -> Self {
        Self { db, jwt, admin }
    }

    /// Creates an unverified account and signs the user in.
    ///
    /// # Returns
    /// - `Ok(UserTokens)` - Access and refresh token for the new user
    /// - `Err(AppError::BadRequest)` - Weak password, or user name or email already taken
    pub async fn register(
        &self,
        user_name: String,
        email: String,
        password: &str,
    ) -> Result<UserTokens, AppError> {
        password::validate_password_strength(password).map_err(AppError::BadRequest)?;

        let repo = UserRepository::new(self.db);
        if repo.find_by_user_name(&user_name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "User name {} is already taken",
                user_name
            )));
        }
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Email {} is already registered",
                email
            )));
        }

        let user = repo
            .create(CreateUserParam {
                user_name,
                email,
                password_hash: password::hash_password(password)?,
                role: Role::Unverified,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.user_name);

        Ok(jwt::generate_tokens(user.id, &user.user_name, self.jwt)?)
    }

    /// Checks credentials and issues a token pair.
    ///
    /// # Returns
    /// - `Ok(UserTokens)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user name or wrong password
    pub async fn login(&self, user_name: &str, password: &str) -> Result<UserTokens, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_user_name(user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(jwt::generate_tokens(user.id, &user.user_name, self.jwt)?)
    }

    /// Exchanges a refresh token for a new token pair.
    ///
    /// # Returns
    /// - `Ok(UserTokens)` - New tokens
    /// - `Err(AuthError)` - Invalid token, access token supplied, or the user is gone or
    ///   was renamed
    pub async fn refresh(&self, refresh_token: &str) -> Result<UserTokens, AppError> {
        let claims = jwt::validate_token(refresh_token, self.jwt)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if claims.token_type != TokenType::RefreshToken {
            return Err(AuthError::WrongTokenType(claims.token_type.as_str().to_string()).into());
        }

        let user = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .filter(|user| user.user_name == claims.user_name)
            .ok_or(AuthError::UserNotInDatabase(claims.sub))?;

        Ok(jwt::generate_tokens(user.id, &user.user_name, self.jwt)?)
    }

    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(EntityKind::User, id))
    }

    pub async fn get_users(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Assigns a role by name.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Unknown role name, or the target is the super admin
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn change_role(&self, id: i32, role_name: &str) -> Result<User, AppError> {
        let role = Role::from_name(role_name)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown role {}", role_name)))?;

        let user = self.get_user(id).await?;
        if user.user_name == self.admin.user_name {
            return Err(AppError::BadRequest(
                "The role of the super admin cannot be changed".to_string(),
            ));
        }

        let user = UserRepository::new(self.db).update_role(id, role).await?;

        tracing::info!("Changed role of user {} to {}", id, role);

        Ok(user)
    }

    /// Replaces a user's password.
    pub async fn change_password(&self, id: i32, password: &str) -> Result<User, AppError> {
        password::validate_password_strength(password).map_err(AppError::BadRequest)?;

        self.get_user(id).await?;

        let user = UserRepository::new(self.db)
            .update_password_hash(id, password::hash_password(password)?)
            .await?;

        Ok(user)
    }

    /// Creates the configured super admin when no user with its name exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Account was created
    /// - `Ok(false)` - Account already existed
    pub async fn ensure_super_admin(&self) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);
        if repo.find_by_user_name(&self.admin.user_name).await?.is_some() {
            return Ok(false);
        }

        let user = repo
            .create(CreateUserParam {
                user_name: self.admin.user_name.clone(),
                email: self.admin.email.clone(),
                password_hash: password::hash_password(&self.admin.password)?,
                role: Role::Admin,
            })
            .await?;

        tracing::info!("Created super admin {} ({})", user.id, user.user_name);

        Ok(true)
    }
}
