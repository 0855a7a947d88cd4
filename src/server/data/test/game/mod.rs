use crate::server::{data::game::GameRepository, model::game::GameParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod update;
