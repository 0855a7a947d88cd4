use std::collections::BTreeMap;

use crate::server::{
    error::{backup::BackupError, AppError},
    model::{
        collection::{
            CreateCollectionParam, GroupPreferences, ItemAmount, NewGroupParam,
            UpdateGroupPreferencesParam,
        },
        game::GameParam,
        image::ImageType,
        item::ItemParam,
    },
    service::{
        backup::BackupService, collection::CollectionService, game::GameService,
        image::ImageService, item::ItemService,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod apply_backup;
