//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod backup;
pub mod config;
pub mod image;

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, backup::BackupError, config::ConfigError, image::ImageError,
    },
};

/// Kind of record a `NotFound` error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Game,
    Item,
    ItemCategory,
    Image,
    Recipe,
    Collection,
    Group,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "User",
            Self::Game => "Game",
            Self::Item => "Item",
            Self::ItemCategory => "Item category",
            Self::Image => "Image",
            Self::Recipe => "Recipe",
            Self::Collection => "Collection",
            Self::Group => "Group",
        };
        f.write_str(name)
    }
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Backup creation or restore error.
    #[error(transparent)]
    BackupErr(#[from] BackupError),

    /// Image upload or image file error.
    #[error(transparent)]
    ImageErr(#[from] ImageError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing or PHC parsing error.
    #[error(transparent)]
    PasswordErr(#[from] argon2::password_hash::Error),

    /// Token signing error.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Referenced record does not exist.
    ///
    /// Results in 404 Not Found naming the entity kind and id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: i32 },

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for building a `NotFound` error.
    pub fn not_found(kind: EntityKind, id: i32) -> Self {
        Self::NotFound { kind, id }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication and backup errors delegate to their own response handling. Internal
/// errors are logged with full details but return generic messages to avoid information
/// leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, JwtErr, etc.)
/// - Variable - For `AuthErr`, `BackupErr` and `ImageErr`, delegated to their own `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BackupErr(err) => err.into_response(),
            Self::ImageErr(err) => err.into_response(),
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("not_found", self.to_string())),
            )
                .into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("bad_request", msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto::new("internal", "Internal server error")),
    )
        .into_response()
}

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        internal_error_response()
    }
}
