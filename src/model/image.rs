use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored image without its bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: i32,
    pub description: String,
    /// 1 = png, 2 = webp, 3 = jpeg.
    pub image_type: i32,
}

/// Multipart form for uploading an image.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadDto {
    pub description: String,
    /// 1 = png, 2 = webp, 3 = jpeg.
    pub image_type: i32,
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
