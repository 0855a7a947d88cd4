use crate::server::{
    error::{image::ImageError, AppError, EntityKind},
    model::{
        game::GameParam,
        image::ImageType,
        item::ItemParam,
        recipe::{RecipeAmount, RecipeParam},
    },
    service::{
        game::GameService, image::ImageService, item::ItemService,
        item_category::ItemCategoryService, recipe::RecipeService,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod image;
mod item;
mod item_category;
