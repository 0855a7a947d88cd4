use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameDto, GameRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::{game::GameParam, user::Role},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Create a game.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new game
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - A referenced item category or image does not exist
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = GameRequestDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_game(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<GameRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let game = GameService::new(&state.db)
        .create(GameParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// List all games.
///
/// # Access Control
/// - Any verified user
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "All games", body = Vec<GameDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_games(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let games = GameService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(games.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a game by id.
///
/// # Access Control
/// - Any verified user
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 200, description = "The game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_game(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let game = GameService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Update a game. The item category list replaces the previous one.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    request_body = GameRequestDto,
    responses(
        (status = 200, description = "Game updated", body = GameDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game or referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_game(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<GameRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let game = GameService::new(&state.db)
        .update(id, GameParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Game deleted
/// - `400 Bad Request` - Items, recipes or collections still belong to the game
/// - `404 Not Found` - Game not found
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 400, description = "Game still in use", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    GameService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
