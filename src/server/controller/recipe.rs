use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, GameQueryDto},
        recipe::{RecipeDto, RecipeRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::{recipe::RecipeParam, user::Role},
        service::recipe::RecipeService,
        state::AppState,
    },
};

/// Tag for grouping recipe endpoints in OpenAPI documentation
pub static RECIPE_TAG: &str = "recipe";

/// Roles allowed to change the recipe catalog.
const WRITE_ROLES: &[Role] = &[Role::Admin, Role::Contributor];

/// Create a recipe.
///
/// # Access Control
/// - `Admin`, `Contributor`
///
/// # Returns
/// - `201 Created` - The new recipe
/// - `404 Not Found` - Referenced game or item does not exist
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    request_body = RecipeRequestDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 403, description = "User may not edit the catalog", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<RecipeRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(WRITE_ROLES)
        .await?;

    let recipe = RecipeService::new(&state.db)
        .create(RecipeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(recipe.into_dto())))
}

/// List recipes, optionally for one game.
///
/// # Access Control
/// - Any verified user
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(("gameId" = Option<i32>, Query, description = "Only recipes of this game")),
    responses(
        (status = 200, description = "Matching recipes", body = Vec<RecipeDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<GameQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let recipes = RecipeService::new(&state.db).get_all(query.game_id).await?;

    Ok((
        StatusCode::OK,
        Json(recipes.into_iter().map(|x| x.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a recipe by id.
///
/// # Access Control
/// - Any verified user
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let recipe = RecipeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(recipe.into_dto())))
}

/// Update a recipe.
///
/// # Access Control
/// - `Admin`, `Contributor`
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    request_body = RecipeRequestDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 403, description = "User may not edit the catalog", body = ErrorDto),
        (status = 404, description = "Recipe or referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<RecipeRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(WRITE_ROLES)
        .await?;

    let recipe = RecipeService::new(&state.db)
        .update(id, RecipeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(recipe.into_dto())))
}

/// Delete a recipe.
///
/// Removes the inputs and outputs. Group preferences that chose the recipe keep the item with no recipe.
///
/// # Access Control
/// - `Admin`, `Contributor`
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 400, description = "Recipe still in use", body = ErrorDto),
        (status = 403, description = "User may not edit the catalog", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(WRITE_ROLES)
        .await?;

    RecipeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
