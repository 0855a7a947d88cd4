use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{ChangePasswordDto, ChangeRoleDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, BearerToken},
        model::user::Role,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Every user
/// - `401 Unauthorized` / `403 Forbidden` - Not signed in or not an admin
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let users = UserService::new(&state.db, &state.config.jwt, &state.config.admin)
        .get_users()
        .await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a user by id.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let user = UserService::new(&state.db, &state.config.jwt, &state.config.admin)
        .get_user(id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the role of a user.
///
/// The configured super admin keeps its role.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Unknown role name or target is the super admin
/// - `404 Not Found` - User not found
#[utoipa::path(
    post,
    path = "/api/users/{id}/role",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = ChangeRoleDto,
    responses(
        (status = 200, description = "Role changed", body = UserDto),
        (status = 400, description = "Invalid role or super admin", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_role(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let user = UserService::new(&state.db, &state.config.jwt, &state.config.admin)
        .change_role(id, &payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the password of a user.
///
/// # Access Control
/// - The user itself, or `Admin`
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Password too short
/// - `403 Forbidden` - Changing another user's password without being an admin
#[utoipa::path(
    post,
    path = "/api/users/{id}/password",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = UserDto),
        (status = 400, description = "Password too short", body = ErrorDto),
        (status = 403, description = "Not allowed to change this password", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    if requester.id != id && requester.role != Role::Admin {
        return Err(AuthError::AccessDenied(
            requester.id,
            format!("Attempted to change the password of user {}", id),
        )
        .into());
    }

    let user = UserService::new(&state.db, &state.config.jwt, &state.config.admin)
        .change_password(id, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
