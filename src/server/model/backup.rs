//! Records written to and read from backup directories.
//!
//! Each backup is a directory holding one pretty-printed JSON file per table. Ids in
//! these records are the ids the rows had when the backup was taken; restoring maps
//! them to freshly assigned ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::backup::BackupDto;

pub const METADATA_FILE: &str = "metaData.json";
pub const USERS_FILE: &str = "users.json";
pub const GAMES_FILE: &str = "games.json";
pub const ITEMS_FILE: &str = "items.json";
pub const RECIPES_FILE: &str = "recipes.json";
pub const COLLECTIONS_FILE: &str = "collections.json";
pub const COLLECTIONS_GROUP_PREFERENCE_FILE: &str = "collectionsGroupPreference.json";
pub const IMAGES_FILE: &str = "images.json";
pub const ITEM_CATEGORIES_FILE: &str = "itemCategories.json";
/// Sub-directory holding a copy of every image file, named `<id>.<extension>`.
pub const IMAGES_DIR: &str = "images";

/// Format version written into new backups.
///
/// Version 1 backups have no image or category files; they restore with neither.
pub const BACKUP_VERSION: i32 = 2;

/// Directory name format of a backup, also used as its id.
pub const BACKUP_ID_FORMAT: &str = "%Y_%m_%d_%H_%M_%S_%3f";
/// Human-readable creation date format stored in the metadata.
pub const BACKUP_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub id: String,
    pub date: String,
    pub version: i32,
}

impl Backup {
    pub fn into_dto(self) -> BackupDto {
        BackupDto {
            id: self.id,
            date: self.date,
            version: self.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: i32,
    pub description: String,
    pub image_type: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategoryRecord {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub item_categories: Vec<i32>,
    #[serde(default)]
    pub icon: Option<i32>,
    #[serde(default)]
    pub banner: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<i32>,
    #[serde(default)]
    pub image: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountRecord {
    pub item_id: i32,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: i32,
    pub game_id: i32,
    pub input: Vec<AmountRecord>,
    pub output: Vec<AmountRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub id: i32,
    pub collection_id: i32,
    pub name: String,
    pub item_amounts: Vec<AmountRecord>,
}

/// Collection with its groups and shared item amounts. Viewer preferences are
/// stored separately in [`CollectionsGroupPreferenceRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    pub name: String,
    pub groups: Vec<GroupRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsGroupPreferenceRecord {
    pub user_id: i32,
    pub collection_id: i32,
    pub group_id: i32,
    pub show_base_ingredients: bool,
    pub collapse_ingredients: bool,
    pub cost_reduction: f32,
    pub group_item_preferences: BTreeMap<i32, Option<i32>>,
}
