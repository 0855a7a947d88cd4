use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum BackupError {
    /// No backup directory with this id contains a metadata file.
    #[error("Backup not found: {0}")]
    NotFound(String),

    /// Backup id contains path separators or other characters outside the id format.
    #[error("Invalid backup id: {0}")]
    InvalidId(String),

    /// A record in the backup refers to an id that is not present in the same backup.
    ///
    /// # Fields
    /// - Kind of the missing record
    /// - Id as stored in the backup
    #[error("Backup references missing {0} with id {1}")]
    MissingReference(&'static str, i32),

    /// Reading or writing a backup file failed.
    #[error("Backup file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A backup file could not be serialized or parsed.
    #[error("Backup file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Converts backup errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For unknown backup ids
/// - 400 Bad Request - For malformed ids and backups with dangling references
/// - 500 Internal Server Error - For file system and serialization failures
impl IntoResponse for BackupError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("not_found", self.to_string())),
            )
                .into_response(),
            Self::InvalidId(_) | Self::MissingReference(_, _) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("bad_request", self.to_string())),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
