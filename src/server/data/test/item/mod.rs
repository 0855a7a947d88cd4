use crate::server::{data::item::ItemRepository, model::item::ItemParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_missing;
mod get_all;
mod is_referenced;
