use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterUserDto, UserDto, UserTokensDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an unverified user and signs it in. An admin must assign a role before the
/// account can use anything beyond `/api/user/me`.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Access and refresh token for the new account
/// - `400 Bad Request` - Password too short, or user name or email already taken
#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserTokensDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = UserService::new(&state.db, &state.config.jwt, &state.config.admin)
        .register(payload.user_name, payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(tokens.into_dto())))
}

/// Sign in with user name and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Access and refresh token
/// - `401 Unauthorized` - Unknown user name or wrong password
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserTokensDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = UserService::new(&state.db, &state.config.jwt, &state.config.admin)
        .login(&payload.user_name, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Exchange a refresh token for a new token pair.
///
/// The refresh token is sent as the bearer token.
///
/// # Access Control
/// - Valid refresh token
///
/// # Returns
/// - `200 OK` - New access and refresh token
/// - `401 Unauthorized` - Missing, invalid or wrong kind of token
#[utoipa::path(
    post,
    path = "/api/user/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Tokens refreshed", body = UserTokensDto),
        (status = 401, description = "Invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn refresh(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let tokens = UserService::new(&state.db, &state.config.jwt, &state.config.admin)
        .refresh(&token.0)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Get the signed-in user.
///
/// # Access Control
/// - Any signed-in user, including unverified ones
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require_any_status()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
