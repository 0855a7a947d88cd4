use crate::server::{
    data::recipe::RecipeRepository,
    model::recipe::{RecipeAmount, RecipeParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
