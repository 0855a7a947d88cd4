use std::collections::BTreeMap;

use crate::server::{
    error::{AppError, EntityKind},
    model::collection::{
        CreateCollectionParam, GroupPreferences, ItemAmount, NewGroupParam, UpdateCollectionParam,
        UpdateGroupEntry, UpdateGroupPreferencesParam,
    },
    service::collection::CollectionService,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod add_collection;
mod add_group;
mod delete;
mod get_collection;
mod preferences;
mod update_collection;
mod update_group;

fn amount(item_id: i32, amount: i32) -> ItemAmount {
    ItemAmount { item_id, amount }
}

fn group_param(name: &str, item_amounts: Vec<ItemAmount>) -> NewGroupParam {
    NewGroupParam {
        name: name.to_string(),
        item_amounts,
    }
}
