use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, GameQueryDto},
        collection::{
            CollectionDto, GroupDto, NewAdminCollectionDto, NewCollectionDto, NewGroupDto,
            UpdateCollectionDto, UpdateGroupDto, UpdateGroupPreferencesDto, UpdateItemAmountDto,
        },
    },
    server::{
        error::{auth::AuthError, AppError, EntityKind},
        middleware::auth::{AuthGuard, BearerToken},
        model::{
            collection::{
                CreateCollectionParam, NewGroupParam, UpdateCollectionParam,
                UpdateGroupPreferencesParam,
            },
            user::{Role, User},
        },
        service::collection::CollectionService,
        state::AppState,
    },
};

/// Tag for grouping collection endpoints in OpenAPI documentation
pub static COLLECTION_TAG: &str = "collection";

/// Fails with `AccessDenied` unless `user` owns the collection.
async fn require_owner(state: &AppState, user: &User, collection_id: i32) -> Result<(), AppError> {
    let owner = CollectionService::new(&state.db)
        .get_collection_owner(collection_id)
        .await?;

    if owner != user.id {
        return Err(AuthError::AccessDenied(
            user.id,
            format!("Attempted to modify collection {} owned by user {}", collection_id, owner),
        )
        .into());
    }

    Ok(())
}

/// Fails with `AccessDenied` unless `user` owns the collection or is an admin.
async fn require_reader(state: &AppState, user: &User, collection_id: i32) -> Result<(), AppError> {
    let owner = CollectionService::new(&state.db)
        .get_collection_owner(collection_id)
        .await?;

    if owner != user.id && user.role != Role::Admin {
        return Err(AuthError::AccessDenied(
            user.id,
            format!("Attempted to read collection {} owned by user {}", collection_id, owner),
        )
        .into());
    }

    Ok(())
}

/// Fails with `NotFound` unless the group exists inside the collection from the path.
async fn require_group_in_collection(
    state: &AppState,
    collection_id: i32,
    group_id: i32,
) -> Result<(), AppError> {
    let parent = CollectionService::new(&state.db)
        .get_group_collection(group_id)
        .await?;

    if parent != collection_id {
        return Err(AppError::not_found(EntityKind::Group, group_id));
    }

    Ok(())
}

/// Create a collection owned by the requesting user.
///
/// # Access Control
/// - Any verified user
///
/// # Returns
/// - `201 Created` - The new collection with every group
/// - `404 Not Found` - Game or an item does not exist; nothing is created
#[utoipa::path(
    post,
    path = "/api/collections",
    tag = COLLECTION_TAG,
    request_body = NewCollectionDto,
    responses(
        (status = 201, description = "Collection created", body = CollectionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_collection(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<NewCollectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let collection = CollectionService::new(&state.db)
        .add_collection(CreateCollectionParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(collection.into_dto())))
}

/// Create a collection on behalf of another user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new collection as seen by its owner
/// - `404 Not Found` - Owner, game or an item does not exist
#[utoipa::path(
    post,
    path = "/api/admin/collections",
    tag = COLLECTION_TAG,
    request_body = NewAdminCollectionDto,
    responses(
        (status = 201, description = "Collection created", body = CollectionDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User, game or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_admin_collection(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<NewAdminCollectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[Role::Admin])
        .await?;

    let collection = CollectionService::new(&state.db)
        .add_collection(CreateCollectionParam::from_admin_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(collection.into_dto())))
}

/// List collections.
///
/// With `gameId` the requesting user's collections for that game are returned.
/// Without it every collection is returned, which only admins may request.
///
/// # Access Control
/// - Any verified user with `gameId`
/// - `Admin` without `gameId`
#[utoipa::path(
    get,
    path = "/api/collections",
    tag = COLLECTION_TAG,
    params(("gameId" = Option<i32>, Query, description = "Only own collections of this game")),
    responses(
        (status = 200, description = "Matching collections", body = Vec<CollectionDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Listing all collections requires admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_collections(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<GameQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;

    let service = CollectionService::new(&state.db);
    let collections = match query.game_id {
        Some(game_id) => service.get_collections(user.id, Some(game_id)).await?,
        None if user.role == Role::Admin => service.get_all_collections(user.id).await?,
        None => {
            return Err(AuthError::AccessDenied(
                user.id,
                "Attempted to list every collection".to_string(),
            )
            .into())
        }
    };

    Ok((
        StatusCode::OK,
        Json(
            collections
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a collection with its groups as seen by the requesting user.
///
/// # Access Control
/// - Owner or `Admin`
#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    params(("id" = i32, Path, description = "Collection id")),
    responses(
        (status = 200, description = "The collection", body = CollectionDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_collection(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_reader(&state, &user, id).await?;

    let collection = CollectionService::new(&state.db)
        .get_collection(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

/// Update a collection's name, game and group list.
///
/// Groups missing from a supplied `groups` list are deleted together with their
/// amounts and every user's preferences for them.
///
/// # Access Control
/// - Owner
#[utoipa::path(
    put,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    params(("id" = i32, Path, description = "Collection id")),
    request_body = UpdateCollectionDto,
    responses(
        (status = 200, description = "Collection updated", body = CollectionDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection, game, group or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_collection(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCollectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_owner(&state, &user, id).await?;

    let collection = CollectionService::new(&state.db)
        .update_collection(user.id, id, UpdateCollectionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

/// Delete a collection with all of its groups.
///
/// # Access Control
/// - Owner
#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    params(("id" = i32, Path, description = "Collection id")),
    responses(
        (status = 204, description = "Collection deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_owner(&state, &user, id).await?;

    CollectionService::new(&state.db)
        .delete_collection(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a group to a collection.
///
/// # Access Control
/// - Owner
#[utoipa::path(
    post,
    path = "/api/collections/{id}/groups",
    tag = COLLECTION_TAG,
    params(("id" = i32, Path, description = "Collection id")),
    request_body = NewGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_group(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<NewGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_owner(&state, &user, id).await?;

    let group = CollectionService::new(&state.db)
        .add_group(user.id, id, NewGroupParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Get a group as seen by the requesting user.
///
/// # Access Control
/// - Owner or `Admin`
#[utoipa::path(
    get,
    path = "/api/collections/{id}/groups/{groupId}",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id"),
        ("groupId" = i32, Path, description = "Group id")
    ),
    responses(
        (status = 200, description = "The group", body = GroupDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_group(
    State(state): State<AppState>,
    token: BearerToken,
    Path((id, group_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_reader(&state, &user, id).await?;
    require_group_in_collection(&state, id, group_id).await?;

    let group = CollectionService::new(&state.db)
        .get_group(user.id, group_id)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Rename a group.
///
/// # Access Control
/// - Owner
#[utoipa::path(
    put,
    path = "/api/collections/{id}/groups/{groupId}",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id"),
        ("groupId" = i32, Path, description = "Group id")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group renamed", body = GroupDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_group(
    State(state): State<AppState>,
    token: BearerToken,
    Path((id, group_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_owner(&state, &user, id).await?;
    require_group_in_collection(&state, id, group_id).await?;

    let group = CollectionService::new(&state.db)
        .update_group(user.id, group_id, payload.name)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group with its item amounts and every user's preferences for it.
///
/// # Access Control
/// - Owner
#[utoipa::path(
    delete,
    path = "/api/collections/{id}/groups/{groupId}",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id"),
        ("groupId" = i32, Path, description = "Group id")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    token: BearerToken,
    Path((id, group_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_owner(&state, &user, id).await?;
    require_group_in_collection(&state, id, group_id).await?;

    CollectionService::new(&state.db)
        .delete_group(group_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set the target amount of an item in a group, adding the item if needed.
///
/// # Access Control
/// - Owner
#[utoipa::path(
    put,
    path = "/api/collections/{id}/groups/{groupId}/items/{itemId}",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id"),
        ("groupId" = i32, Path, description = "Group id"),
        ("itemId" = i32, Path, description = "Item id")
    ),
    request_body = UpdateItemAmountDto,
    responses(
        (status = 200, description = "Amount stored", body = GroupDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection, group or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_item_amount(
    State(state): State<AppState>,
    token: BearerToken,
    Path((id, group_id, item_id)): Path<(i32, i32, i32)>,
    Json(payload): Json<UpdateItemAmountDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_owner(&state, &user, id).await?;
    require_group_in_collection(&state, id, group_id).await?;

    let group = CollectionService::new(&state.db)
        .update_item_amount(user.id, group_id, item_id, payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Remove an item from a group.
///
/// # Access Control
/// - Owner
#[utoipa::path(
    delete,
    path = "/api/collections/{id}/groups/{groupId}/items/{itemId}",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id"),
        ("groupId" = i32, Path, description = "Group id"),
        ("itemId" = i32, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item removed", body = GroupDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection, group or item amount not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_item_amount(
    State(state): State<AppState>,
    token: BearerToken,
    Path((id, group_id, item_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_owner(&state, &user, id).await?;
    require_group_in_collection(&state, id, group_id).await?;

    let group = CollectionService::new(&state.db)
        .delete_item_amount(user.id, group_id, item_id)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Replace the requesting user's preferences for a group.
///
/// Only the requesting user's preference rows change. The recipe map replaces the
/// stored one; items left out of it lose their recipe choice.
///
/// # Access Control
/// - Owner or `Admin`
#[utoipa::path(
    put,
    path = "/api/collections/{id}/groups/{groupId}/preferences",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id"),
        ("groupId" = i32, Path, description = "Group id")
    ),
    request_body = UpdateGroupPreferencesDto,
    responses(
        (status = 200, description = "Preferences stored", body = GroupDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Collection, group, item or recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_group_preferences(
    State(state): State<AppState>,
    token: BearerToken,
    Path((id, group_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateGroupPreferencesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt, &token)
        .require(&[])
        .await?;
    require_reader(&state, &user, id).await?;

    let group = CollectionService::new(&state.db)
        .update_group_preferences(
            user.id,
            id,
            group_id,
            UpdateGroupPreferencesParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}
