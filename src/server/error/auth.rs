use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, issuer, audience or expiry failed validation.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    /// An access token was presented where a refresh token is required, or vice versa.
    #[error("Token of type {0} cannot be used for this request")]
    WrongTokenType(String),

    /// Token refers to a user id that no longer exists, or whose user name changed.
    #[error("User {0} from token does not match a stored user")]
    UserNotInDatabase(i32),

    /// User has not been verified by an admin yet.
    #[error("User {0} is not verified")]
    Unverified(i32),

    /// User lacks the role or ownership required for the request.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied action, logged only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Unknown user name or wrong password at login.
    #[error("Invalid user name or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing, invalid or mismatched credentials
/// - 403 Forbidden - For unverified users and denied access
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::WrongTokenType(_)
            | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("unauthorized", "Authentication required")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("unauthorized", self.to_string())),
            )
                .into_response(),
            Self::Unverified(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "forbidden",
                    "Your account has not been verified yet",
                )),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "forbidden",
                    "You do not have permission to perform this action",
                )),
            )
                .into_response(),
        }
    }
}
