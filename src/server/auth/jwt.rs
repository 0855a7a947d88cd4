//! HS256 access and refresh tokens.
//!
//! Both token kinds carry the same [`Claims`] and differ only in `tokenType` and expiry.
//! Validation checks signature, expiry, issuer and audience.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{config::JwtConfig, model::user::UserTokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    AccessToken,
    RefreshToken,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessToken => "AccessToken",
            Self::RefreshToken => "RefreshToken",
        }
    }
}

/// Claims embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject, the user's database id.
    pub sub: i32,
    pub user_name: String,
    pub token_type: TokenType,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    /// Unique token identifier.
    pub jti: String,
}

/// Signs a token of the given kind for a user.
pub fn generate_token(
    user_id: i32,
    user_name: &str,
    token_type: TokenType,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let lifetime = match token_type {
        TokenType::AccessToken => Duration::minutes(config.access_token_expiry_mins),
        TokenType::RefreshToken => Duration::days(config.refresh_token_expiry_days),
    };

    let claims = Claims {
        sub: user_id,
        user_name: user_name.to_string(),
        token_type,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Issues a fresh access and refresh token pair.
pub fn generate_tokens(
    user_id: i32,
    user_name: &str,
    config: &JwtConfig,
) -> Result<UserTokens, jsonwebtoken::errors::Error> {
    Ok(UserTokens {
        access_token: generate_token(user_id, user_name, TokenType::AccessToken, config)?,
        refresh_token: generate_token(user_id, user_name, TokenType::RefreshToken, config)?,
    })
}

/// Validates a token and returns its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[config.issuer.as_str()]);
    validation.set_audience(&[config.audience.as_str()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}
