use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum ImageError {
    /// The upload named an image type code that is not supported.
    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    /// A required multipart field was absent from the upload.
    #[error("Missing upload field: {0}")]
    MissingField(&'static str),

    /// Reading or writing an image file failed.
    #[error("Image file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Converts image errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For malformed uploads
/// - 500 Internal Server Error - For file system failures
impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        match self {
            Self::UnsupportedType(_) | Self::MissingField(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("bad_request", self.to_string())),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
