use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use sea_orm::DatabaseConnection;

use crate::{
    model::{api::ErrorDto, backup::BackupDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::user::Role,
        service::backup::BackupService,
        state::AppState,
    },
};

/// Tag for grouping backup endpoints in OpenAPI documentation
pub static BACKUP_TAG: &str = "backup";

/// Write the whole database into a new backup directory.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Metadata of the new backup
/// - `500 Internal Server Error` - Backup directory could not be written
#[utoipa::path(
    post,
    path = "/api/backups",
    tag = BACKUP_TAG,
    responses(
        (status = 201, description = "Backup created", body = BackupDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_backup(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let backup = backup_service(&state)
        .create_backup(user.id)
        .await?;

    tracing::info!("User {} created backup {}", user.id, backup.id);

    Ok((StatusCode::CREATED, Json(backup.into_dto())))
}

/// List available backups, oldest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/backups",
    tag = BACKUP_TAG,
    responses(
        (status = 200, description = "Available backups", body = Vec<BackupDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_backups(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let backups = backup_service(&state)
        .get_backups()
        .await?;

    Ok((
        StatusCode::OK,
        Json(backups.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Replace every table with the content of a backup.
///
/// Runs in a single transaction; on any failure the database is left unchanged.
/// Tokens issued before the restore stop matching their user if ids changed.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Backup restored
/// - `400 Bad Request` - Malformed backup id or inconsistent backup content
/// - `404 Not Found` - No backup with that id
#[utoipa::path(
    post,
    path = "/api/backups/{backupId}/apply",
    tag = BACKUP_TAG,
    params(("backupId" = String, Path, description = "Backup directory name")),
    responses(
        (status = 204, description = "Backup restored"),
        (status = 400, description = "Invalid backup", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Backup not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn apply_backup(
    State(state): State<AppState>,
    token: BearerToken,
    Path(backup_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    backup_service(&state)
        .apply_backup(&backup_id)
        .await?;

    tracing::info!("User {} restored backup {}", user.id, backup_id);

    Ok(StatusCode::NO_CONTENT)
}

fn backup_service(state: &AppState) -> BackupService<'_, DatabaseConnection> {
    BackupService::new(
        &state.db,
        &state.config.backup_dir,
        &state.config.image_dir,
    )
}
