use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, GameQueryDto},
        item::{ItemCategoryDto, ItemDto, ItemRequestDto, NewItemCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::{item::ItemParam, user::Role},
        service::{item::ItemService, item_category::ItemCategoryService},
        state::AppState,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// Roles allowed to change the item catalog.
const WRITE_ROLES: &[Role] = &[Role::Admin, Role::Contributor];

/// Create a item.
///
/// # Access Control
/// - `Admin`, `Contributor`
///
/// # Returns
/// - `201 Created` - The new item
/// - `404 Not Found` - Referenced game, category or image does not exist
#[utoipa::path(
    post,
    path = "/api/items",
    tag = ITEM_TAG,
    request_body = ItemRequestDto,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 403, description = "User may not edit the catalog", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_item(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<ItemRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(WRITE_ROLES)
        .await?;

    let item = ItemService::new(&state.db)
        .create(ItemParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// List items, optionally for one game.
///
/// # Access Control
/// - Any verified user
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    params(("gameId" = Option<i32>, Query, description = "Only items of this game")),
    responses(
        (status = 200, description = "Matching items", body = Vec<ItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_items(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<GameQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let items = ItemService::new(&state.db).get_all(query.game_id).await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(|x| x.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a item by id.
///
/// # Access Control
/// - Any verified user
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_item(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let item = ItemService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Update a item.
///
/// # Access Control
/// - `Admin`, `Contributor`
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(("id" = i32, Path, description = "Item id")),
    request_body = ItemRequestDto,
    responses(
        (status = 200, description = "Item updated", body = ItemDto),
        (status = 403, description = "User may not edit the catalog", body = ErrorDto),
        (status = 404, description = "Item or referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_item(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<ItemRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(WRITE_ROLES)
        .await?;

    let item = ItemService::new(&state.db)
        .update(id, ItemParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete a item.
///
/// Fails with `400 Bad Request` while recipes or collections still use the item.
///
/// # Access Control
/// - `Admin`, `Contributor`
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Item still in use", body = ErrorDto),
        (status = 403, description = "User may not edit the catalog", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(WRITE_ROLES)
        .await?;

    ItemService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create an item category shared by all games.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new category
/// - `400 Bad Request` - The name is blank
#[utoipa::path(
    post,
    path = "/api/items/categories",
    tag = ITEM_TAG,
    request_body = NewItemCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ItemCategoryDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_item_category(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<NewItemCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let category = ItemCategoryService::new(&state.db)
        .create(payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// List item categories.
///
/// # Access Control
/// - Any verified user
#[utoipa::path(
    get,
    path = "/api/items/categories",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "All item categories", body = Vec<ItemCategoryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_item_categories(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let categories = ItemCategoryService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
