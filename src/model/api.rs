use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Stable machine-readable error kind (`not_found`, `bad_request`, `unauthorized`,
    /// `forbidden`, `internal`).
    pub kind: String,
    /// Human-readable message.
    pub error: String,
}

impl ErrorDto {
    pub fn new(kind: &str, error: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            error: error.into(),
        }
    }
}

/// Optional game filter accepted by the listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameQueryDto {
    pub game_id: Option<i32>,
}
