use axum::{
    routing::{get, post, put},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{auth, backup, collection, game, image, item, recipe, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Game Tools API", description = "Crafting collection tracker"),
    paths(
        auth::register,
        auth::login,
        auth::refresh,
        auth::get_me,
        user::get_users,
        user::get_user,
        user::change_role,
        user::change_password,
        game::create_game,
        game::get_games,
        game::get_game,
        game::update_game,
        game::delete_game,
        item::create_item,
        item::get_items,
        item::get_item,
        item::update_item,
        item::delete_item,
        item::create_item_category,
        item::get_item_categories,
        image::add_image,
        image::get_images,
        image::get_image_data,
        image::delete_image,
        recipe::create_recipe,
        recipe::get_recipes,
        recipe::get_recipe,
        recipe::update_recipe,
        recipe::delete_recipe,
        collection::add_collection,
        collection::add_admin_collection,
        collection::get_collections,
        collection::get_collection,
        collection::update_collection,
        collection::delete_collection,
        collection::add_group,
        collection::get_group,
        collection::update_group,
        collection::delete_group,
        collection::update_item_amount,
        collection::delete_item_amount,
        collection::update_group_preferences,
        backup::create_backup,
        backup::get_backups,
        backup::apply_backup,
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "user", description = "User administration"),
        (name = "game", description = "Games"),
        (name = "item", description = "Item catalog and item categories"),
        (name = "image", description = "Image upload and download"),
        (name = "recipe", description = "Recipe catalog"),
        (name = "collection", description = "Collections, groups and viewer preferences"),
        (name = "backup", description = "Database backup and restore"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by the protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(openapi))
        .route("/api/user/register", post(auth::register))
        .route("/api/user/login", post(auth::login))
        .route("/api/user/refresh", post(auth::refresh))
        .route("/api/user/me", get(auth::get_me))
        .route("/api/users", get(user::get_users))
        .route("/api/users/{id}", get(user::get_user))
        .route("/api/users/{id}/role", post(user::change_role))
        .route("/api/users/{id}/password", post(user::change_password))
        .route("/api/games", get(game::get_games).post(game::create_game))
        .route(
            "/api/games/{id}",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        )
        .route("/api/items", get(item::get_items).post(item::create_item))
        .route(
            "/api/items/categories",
            get(item::get_item_categories).post(item::create_item_category),
        )
        .route(
            "/api/items/{id}",
            get(item::get_item)
                .put(item::update_item)
                .delete(item::delete_item),
        )
        .route("/api/images", get(image::get_images).post(image::add_image))
        .route(
            "/api/images/{id}",
            get(image::get_image_data).delete(image::delete_image),
        )
        .route(
            "/api/recipes",
            get(recipe::get_recipes).post(recipe::create_recipe),
        )
        .route(
            "/api/recipes/{id}",
            get(recipe::get_recipe)
                .put(recipe::update_recipe)
                .delete(recipe::delete_recipe),
        )
        .route(
            "/api/collections",
            get(collection::get_collections).post(collection::add_collection),
        )
        .route(
            "/api/admin/collections",
            post(collection::add_admin_collection),
        )
        .route(
            "/api/collections/{id}",
            get(collection::get_collection)
                .put(collection::update_collection)
                .delete(collection::delete_collection),
        )
        .route("/api/collections/{id}/groups", post(collection::add_group))
        .route(
            "/api/collections/{id}/groups/{groupId}",
            get(collection::get_group)
                .put(collection::update_group)
                .delete(collection::delete_group),
        )
        .route(
            "/api/collections/{id}/groups/{groupId}/items/{itemId}",
            put(collection::update_item_amount).delete(collection::delete_item_amount),
        )
        .route(
            "/api/collections/{id}/groups/{groupId}/preferences",
            put(collection::update_group_preferences),
        )
        .route(
            "/api/backups",
            get(backup::get_backups).post(backup::create_backup),
        )
        .route("/api/backups/{backupId}/apply", post(backup::apply_backup))
}
