use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        image::{ImageDto, ImageUploadDto},
    },
    server::{
        error::{image::ImageError, AppError},
        middleware::auth::{AuthGuard, BearerToken},
        model::{image::ImageType, user::Role},
        service::image::ImageService,
        state::AppState,
    },
};

/// Tag for grouping image endpoints in OpenAPI documentation
pub static IMAGE_TAG: &str = "image";

/// Upload an image.
///
/// Expects a multipart form with a `file` field plus `description` and `imageType`
/// text fields.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Metadata of the stored image
/// - `400 Bad Request` - A field is missing or the image type is unsupported
#[utoipa::path(
    post,
    path = "/api/images",
    tag = IMAGE_TAG,
    request_body(content = ImageUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = ImageDto),
        (status = 400, description = "Malformed upload", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_image(
    State(state): State<AppState>,
    token: BearerToken,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let upload = read_upload(multipart).await?;
    let image_type = ImageType::from_code(upload.image_type)
        .ok_or_else(|| ImageError::UnsupportedType(upload.image_type.to_string()))?;

    let image = ImageService::new(&state.db, &state.config.image_dir)
        .add_image(image_type, upload.description, &upload.file)
        .await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}

/// List image metadata.
///
/// # Access Control
/// - Any verified user
#[utoipa::path(
    get,
    path = "/api/images",
    tag = IMAGE_TAG,
    responses(
        (status = 200, description = "All images", body = Vec<ImageDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_images(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let images = ImageService::new(&state.db, &state.config.image_dir)
        .get_images()
        .await?;

    Ok((
        StatusCode::OK,
        Json(images.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Download the file of an image.
///
/// # Access Control
/// - Any verified user
///
/// # Returns
/// - `200 OK` - Raw bytes with the image content type
/// - `404 Not Found` - Image not found
#[utoipa::path(
    get,
    path = "/api/images/{id}",
    tag = IMAGE_TAG,
    params(("id" = i32, Path, description = "Image id")),
    responses(
        (status = 200, description = "Image file", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_image_data(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let (image, data) = ImageService::new(&state.db, &state.config.image_dir)
        .get_image_data(id)
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, image.image_type.content_type())],
        data,
    ))
}

/// Delete an image and its file.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Image deleted
/// - `400 Bad Request` - A game or item still shows the image
/// - `404 Not Found` - Image not found
#[utoipa::path(
    delete,
    path = "/api/images/{id}",
    tag = IMAGE_TAG,
    params(("id" = i32, Path, description = "Image id")),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 400, description = "Image still in use", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_image(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    ImageService::new(&state.db, &state.config.image_dir)
        .delete_image(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Collects the upload fields. Unknown fields are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<ImageUploadDto, AppError> {
    let mut description: Option<String> = None;
    let mut image_type: Option<String> = None;
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some(data.to_vec());
            }
            "description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                description = Some(text);
            }
            "imageType" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image_type = Some(text);
            }
            _ => {}
        }
    }

    let image_type = image_type.ok_or(ImageError::MissingField("imageType"))?;
    let image_type = image_type
        .trim()
        .parse::<i32>()
        .map_err(|_| ImageError::UnsupportedType(image_type.clone()))?;

    Ok(ImageUploadDto {
        description: description.ok_or(ImageError::MissingField("description"))?,
        image_type,
        file: file.ok_or(ImageError::MissingField("file"))?,
    })
}
