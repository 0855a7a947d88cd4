use crate::server::data::collection::CollectionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod hydrate;
