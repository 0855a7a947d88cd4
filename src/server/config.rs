//! Environment-based application configuration.
//!
//! Values are read once at startup after `.env` has been loaded. Required variables
//! produce `ConfigError::MissingEnvVar` when absent; optional ones fall back to defaults.

use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_ISSUER: &str = "game-tools";
const DEFAULT_JWT_AUDIENCE: &str = "game-tools-users";
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 5;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 180;
const DEFAULT_BACKUP_DIR: &str = "backups";
const DEFAULT_IMAGE_DIR: &str = "images";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Settings used to sign and validate tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret.
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

/// Account created on startup when no user with its name exists.
///
/// Its role can never be changed through the API.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    pub backup_dir: PathBuf,
    /// Directory holding uploaded image files.
    pub image_dir: PathBuf,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                issuer: optional("JWT_ISSUER", DEFAULT_JWT_ISSUER.to_string())?,
                audience: optional("JWT_AUDIENCE", DEFAULT_JWT_AUDIENCE.to_string())?,
                access_token_expiry_mins: optional(
                    "JWT_ACCESS_EXPIRY_MINS",
                    DEFAULT_ACCESS_EXPIRY_MINS,
                )?,
                refresh_token_expiry_days: optional(
                    "JWT_REFRESH_EXPIRY_DAYS",
                    DEFAULT_REFRESH_EXPIRY_DAYS,
                )?,
            },
            admin: AdminConfig {
                user_name: required("ADMIN_USER_NAME")?,
                email: required("ADMIN_EMAIL")?,
                password: required("ADMIN_PASSWORD")?,
            },
            backup_dir: optional("BACKUP_DIR", PathBuf::from(DEFAULT_BACKUP_DIR))?,
            image_dir: optional("IMAGE_DIR", PathBuf::from(DEFAULT_IMAGE_DIR))?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
        })
    }
}

/// Reads a variable that must be set and non-empty.
fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Reads and parses an optional variable, using `default` when it is unset.
fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
