//! JSON backup export and restore.
//!
//! A backup is a directory under the configured backup root named after its creation
//! time. Restoring wipes every table and re-inserts the backup's rows in one
//! transaction, assigning new ids and rewriting every foreign id through the mapping
//! built along the way.
//!
//! Image files are copied into the backup's `images` directory. On restore they are
//! read before the transaction starts and written to the image directory under their
//! new ids once it has committed.

use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
};

use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::{
    data::{
        backup::BackupRepository, game::GameRepository, image::ImageRepository,
        item::ItemRepository, item_category::ItemCategoryRepository, recipe::RecipeRepository,
        user::UserRepository,
    },
    error::{backup::BackupError, AppError},
    model::{
        backup::{
            AmountRecord, Backup, CollectionRecord, CollectionsGroupPreferenceRecord, GameRecord,
            GroupRecord, ImageRecord, ItemCategoryRecord, ItemRecord, RecipeRecord, UserRecord,
            BACKUP_DATE_FORMAT, BACKUP_ID_FORMAT, BACKUP_VERSION, COLLECTIONS_FILE,
            COLLECTIONS_GROUP_PREFERENCE_FILE, GAMES_FILE, IMAGES_DIR, IMAGES_FILE,
            ITEMS_FILE, ITEM_CATEGORIES_FILE, METADATA_FILE, RECIPES_FILE, USERS_FILE,
        },
        collection::{
            CreateCollectionParam, GroupPreferences, ItemAmount, NewGroupParam,
            UpdateGroupPreferencesParam,
        },
        game::GameParam,
        image::{ImageMetaData, ImageType},
        item::ItemParam,
        recipe::{RecipeAmount, RecipeParam},
        user::{CreateUserParam, Role},
    },
    service::collection::CollectionService,
};

pub struct BackupService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
    backup_dir: &'a Path,
    image_dir: &'a Path,
}

impl<'a, C: ConnectionTrait + TransactionTrait> BackupService<'a, C> {
    pub fn new(db: &'a C, backup_dir: &'a Path, image_dir: &'a Path) -> Self {
        Self {
            db,
            backup_dir,
            image_dir,
        }
    }

    /// Writes every table into a new backup directory.
    ///
    /// # Arguments
    /// - `viewer_id` - User the collections are read as; only shared collection data is
    ///   written, preferences are exported for every user separately
    ///
    /// # Returns
    /// - `Ok(Backup)` - Metadata of the new backup
    /// - `Err(AppError::BackupErr)` - Directory or file could not be written, or an image
    ///   file is missing from the image directory
    pub async fn create_backup(&self, viewer_id: i32) -> Result<Backup, AppError> {
        let now = chrono::Local::now();
        let backup = Backup {
            id: now.format(BACKUP_ID_FORMAT).to_string(),
            date: now.format(BACKUP_DATE_FORMAT).to_string(),
            version: BACKUP_VERSION,
        };

        let users: Vec<UserRecord> = user_records(self.db).await?;
        let images: Vec<ImageMetaData> = ImageRepository::new(self.db).get_all().await?;
        let item_categories: Vec<ItemCategoryRecord> = ItemCategoryRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|category| ItemCategoryRecord {
                id: category.id,
                name: category.name,
            })
            .collect();
        let games: Vec<GameRecord> = GameRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|game| GameRecord {
                id: game.id,
                name: game.name,
                item_categories: game.item_categories.iter().map(|c| c.id).collect(),
                icon: game.icon_id,
                banner: game.banner_id,
            })
            .collect();
        let items: Vec<ItemRecord> = ItemRepository::new(self.db)
            .get_all(None)
            .await?
            .into_iter()
            .map(|item| ItemRecord {
                id: item.id,
                game_id: item.game_id,
                name: item.name,
                categories: item.categories.iter().map(|c| c.id).collect(),
                image: item.image_id,
            })
            .collect();
        let recipes: Vec<RecipeRecord> = RecipeRepository::new(self.db)
            .get_all(None)
            .await?
            .into_iter()
            .map(|recipe| RecipeRecord {
                id: recipe.id,
                game_id: recipe.game_id,
                input: recipe.input.into_iter().map(amount_record).collect(),
                output: recipe.output.into_iter().map(amount_record).collect(),
            })
            .collect();

        let collection_service = CollectionService::new(self.db);
        let collections: Vec<CollectionRecord> = collection_service
            .get_all_collections(viewer_id)
            .await?
            .into_iter()
            .map(|collection| CollectionRecord {
                id: collection.id,
                user_id: collection.user_id,
                game_id: collection.game_id,
                name: collection.name,
                groups: collection
                    .groups
                    .into_iter()
                    .map(|group| GroupRecord {
                        id: group.id,
                        collection_id: group.collection_id,
                        name: group.name,
                        item_amounts: group
                            .item_amounts
                            .into_iter()
                            .map(|amount| AmountRecord {
                                item_id: amount.item_id,
                                amount: amount.amount,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        let preferences: Vec<CollectionsGroupPreferenceRecord> = collection_service
            .get_collections_group_preference()
            .await?
            .into_iter()
            .map(|row| CollectionsGroupPreferenceRecord {
                user_id: row.user_id,
                collection_id: row.collection_id,
                group_id: row.group_id,
                show_base_ingredients: row.preferences.show_base_ingredients,
                collapse_ingredients: row.preferences.collapse_ingredients,
                cost_reduction: row.preferences.cost_reduction,
                group_item_preferences: row.group_item_preferences,
            })
            .collect();

        let dir = self.backup_dir.join(&backup.id);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| BackupError::Io {
                path: dir.display().to_string(),
                source,
            })?;

        let image_copy_dir = dir.join(IMAGES_DIR);
        tokio::fs::create_dir_all(&image_copy_dir)
            .await
            .map_err(|source| BackupError::Io {
                path: image_copy_dir.display().to_string(),
                source,
            })?;
        for image in &images {
            let source_path = self.image_dir.join(&image.path);
            let target = image_copy_dir.join(ImageMetaData::file_name(image.id, image.image_type));
            tokio::fs::copy(&source_path, &target)
                .await
                .map_err(|source| BackupError::Io {
                    path: source_path.display().to_string(),
                    source,
                })?;
        }
        let image_records: Vec<ImageRecord> = images
            .into_iter()
            .map(|image| ImageRecord {
                id: image.id,
                description: image.description,
                image_type: image.image_type.code(),
            })
            .collect();

        write_json(&dir.join(METADATA_FILE), &backup).await?;
        write_json(&dir.join(USERS_FILE), &users).await?;
        write_json(&dir.join(IMAGES_FILE), &image_records).await?;
        write_json(&dir.join(ITEM_CATEGORIES_FILE), &item_categories).await?;
        write_json(&dir.join(GAMES_FILE), &games).await?;
        write_json(&dir.join(ITEMS_FILE), &items).await?;
        write_json(&dir.join(RECIPES_FILE), &recipes).await?;
        write_json(&dir.join(COLLECTIONS_FILE), &collections).await?;
        write_json(&dir.join(COLLECTIONS_GROUP_PREFERENCE_FILE), &preferences).await?;

        tracing::info!(
            "Created backup {} with {} users, {} collections",
            backup.id,
            users.len(),
            collections.len()
        );

        Ok(backup)
    }

    /// Lists every backup directory that holds a metadata file, sorted by id.
    ///
    /// A missing backup root yields an empty list.
    pub async fn get_backups(&self) -> Result<Vec<Backup>, AppError> {
        let mut entries = match tokio::fs::read_dir(self.backup_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(BackupError::Io {
                    path: self.backup_dir.display().to_string(),
                    source,
                }
                .into())
            }
        };

        let mut backups = Vec::new();
        loop {
            let entry = entries
                .next_entry()
                .await
                .map_err(|source| BackupError::Io {
                    path: self.backup_dir.display().to_string(),
                    source,
                })?;
            let Some(entry) = entry else {
                break;
            };

            let metadata = entry.path().join(METADATA_FILE);
            if path_exists(&metadata).await? {
                backups.push(read_json::<Backup>(&metadata).await?);
            }
        }

        backups.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(backups)
    }

    /// Replaces the whole database with the content of a backup.
    ///
    /// # Returns
    /// - `Ok(())` - Restore committed
    /// - `Err(BackupError::InvalidId)` - Id is not a backup directory name
    /// - `Err(BackupError::NotFound)` - No such backup
    /// - `Err(BackupError::MissingReference)` - A record points at an id missing from the
    ///   backup; nothing was changed
    /// - `Err(AppError::BadRequest)` - A user record carries an unknown role or an image
    ///   record an unknown type; nothing was changed
    pub async fn apply_backup(&self, backup_id: &str) -> Result<(), AppError> {
        let dir = self.backup_path(backup_id)?;
        if !path_exists(&dir.join(METADATA_FILE)).await? {
            return Err(BackupError::NotFound(backup_id.to_string()).into());
        }

        let users: Vec<UserRecord> = read_json(&dir.join(USERS_FILE)).await?;
        let images: Vec<ImageRecord> = read_optional_json(&dir.join(IMAGES_FILE)).await?;
        let item_categories: Vec<ItemCategoryRecord> =
            read_optional_json(&dir.join(ITEM_CATEGORIES_FILE)).await?;
        let games: Vec<GameRecord> = read_json(&dir.join(GAMES_FILE)).await?;
        let items: Vec<ItemRecord> = read_json(&dir.join(ITEMS_FILE)).await?;
        let recipes: Vec<RecipeRecord> = read_json(&dir.join(RECIPES_FILE)).await?;
        let collections: Vec<CollectionRecord> = read_json(&dir.join(COLLECTIONS_FILE)).await?;
        let preferences: Vec<CollectionsGroupPreferenceRecord> =
            read_json(&dir.join(COLLECTIONS_GROUP_PREFERENCE_FILE)).await?;

        let mut image_files = Vec::with_capacity(images.len());
        for record in images {
            let image_type = ImageType::from_code(record.image_type).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid image type {} for image {}",
                    record.image_type, record.id
                ))
            })?;
            let path = dir
                .join(IMAGES_DIR)
                .join(ImageMetaData::file_name(record.id, image_type));
            let data = tokio::fs::read(&path)
                .await
                .map_err(|source| BackupError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
            image_files.push((record, image_type, data));
        }

        let txn = self.db.begin().await?;

        let stale_files: Vec<String> = ImageRepository::new(&txn)
            .get_all()
            .await?
            .into_iter()
            .map(|image| image.path)
            .collect();
        BackupRepository::new(&txn).clear_all().await?;

        let mut user_ids = HashMap::new();
        let user_repo = UserRepository::new(&txn);
        for record in users {
            let role = Role::from_name(&record.role).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid role {} for user {}",
                    record.role, record.user_name
                ))
            })?;
            let user = user_repo
                .create(CreateUserParam {
                    user_name: record.user_name,
                    email: record.email,
                    password_hash: record.password_hash,
                    role,
                })
                .await?;
            user_ids.insert(record.id, user.id);
        }

        let mut image_ids = HashMap::new();
        let mut restored_files = Vec::with_capacity(image_files.len());
        let image_repo = ImageRepository::new(&txn);
        for (record, image_type, data) in image_files {
            let image = image_repo.create(image_type, record.description).await?;
            let file_name = ImageMetaData::file_name(image.id, image_type);
            image_repo.set_path(image.id, file_name.clone()).await?;
            image_ids.insert(record.id, image.id);
            restored_files.push((file_name, data));
        }

        let mut category_ids = HashMap::new();
        let category_repo = ItemCategoryRepository::new(&txn);
        for record in item_categories {
            let category = category_repo.create(record.name).await?;
            category_ids.insert(record.id, category.id);
        }

        let mut game_ids = HashMap::new();
        let game_repo = GameRepository::new(&txn);
        for record in games {
            let game = game_repo
                .create(GameParam {
                    name: record.name,
                    item_category_ids: remap_all(
                        &category_ids,
                        "category",
                        &record.item_categories,
                    )?,
                    icon_id: remap_optional(&image_ids, "image", record.icon)?,
                    banner_id: remap_optional(&image_ids, "image", record.banner)?,
                })
                .await?;
            game_ids.insert(record.id, game.id);
        }

        let mut item_ids = HashMap::new();
        let item_repo = ItemRepository::new(&txn);
        for record in items {
            let item = item_repo
                .create(ItemParam {
                    game_id: remap(&game_ids, "game", record.game_id)?,
                    name: record.name,
                    category_ids: remap_all(&category_ids, "category", &record.categories)?,
                    image_id: remap_optional(&image_ids, "image", record.image)?,
                })
                .await?;
            item_ids.insert(record.id, item.id);
        }

        let mut recipe_ids = HashMap::new();
        let recipe_repo = RecipeRepository::new(&txn);
        for record in recipes {
            let recipe = recipe_repo
                .create(RecipeParam {
                    game_id: remap(&game_ids, "game", record.game_id)?,
                    input: remap_recipe_amounts(&item_ids, &record.input)?,
                    output: remap_recipe_amounts(&item_ids, &record.output)?,
                })
                .await?;
            recipe_ids.insert(record.id, recipe.id);
        }

        let collection_service = CollectionService::new(&txn);

        let mut collection_ids = HashMap::new();
        let mut group_ids = HashMap::new();
        for record in collections {
            let mut groups = Vec::with_capacity(record.groups.len());
            for group in &record.groups {
                groups.push(NewGroupParam {
                    name: group.name.clone(),
                    item_amounts: remap_item_amounts(&item_ids, &group.item_amounts)?,
                });
            }

            let collection = collection_service
                .add_collection(CreateCollectionParam {
                    user_id: remap(&user_ids, "user", record.user_id)?,
                    game_id: remap(&game_ids, "game", record.game_id)?,
                    name: record.name,
                    groups,
                })
                .await?;

            collection_ids.insert(record.id, collection.id);
            for (old, new) in record.groups.iter().zip(collection.groups.iter()) {
                group_ids.insert(old.id, new.id);
            }
        }

        for record in preferences {
            let mut choices = BTreeMap::new();
            for (item_id, recipe_id) in &record.group_item_preferences {
                let recipe_id = match recipe_id {
                    Some(recipe_id) => Some(remap(&recipe_ids, "recipe", *recipe_id)?),
                    None => None,
                };
                choices.insert(remap(&item_ids, "item", *item_id)?, recipe_id);
            }

            collection_service
                .update_group_preferences(
                    remap(&user_ids, "user", record.user_id)?,
                    remap(&collection_ids, "collection", record.collection_id)?,
                    remap(&group_ids, "group", record.group_id)?,
                    UpdateGroupPreferencesParam {
                        preferences: GroupPreferences {
                            show_base_ingredients: record.show_base_ingredients,
                            collapse_ingredients: record.collapse_ingredients,
                            cost_reduction: record.cost_reduction,
                        },
                        item_recipe_preferences: choices,
                    },
                )
                .await?;
        }

        txn.commit().await?;

        self.replace_image_files(&stale_files, restored_files).await?;

        tracing::info!(
            "Applied backup {}: {} users, {} collections",
            backup_id,
            user_ids.len(),
            collection_ids.len()
        );

        Ok(())
    }

    /// Writes restored image files, then removes files of the replaced images that
    /// no restored image reuses.
    async fn replace_image_files(
        &self,
        stale_files: &[String],
        restored_files: Vec<(String, Vec<u8>)>,
    ) -> Result<(), BackupError> {
        tokio::fs::create_dir_all(self.image_dir)
            .await
            .map_err(|source| BackupError::Io {
                path: self.image_dir.display().to_string(),
                source,
            })?;

        let restored_names: Vec<String> =
            restored_files.iter().map(|(name, _)| name.clone()).collect();
        for (file_name, data) in restored_files {
            let path = self.image_dir.join(&file_name);
            tokio::fs::write(&path, data)
                .await
                .map_err(|source| BackupError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
        }

        for file_name in stale_files {
            if file_name.is_empty() || restored_names.contains(file_name) {
                continue;
            }
            let path = self.image_dir.join(file_name);
            if let Err(err) = tokio::fs::remove_file(&path).await {
                tracing::warn!("Could not remove replaced image {}: {}", path.display(), err);
            }
        }

        Ok(())
    }

    /// Resolves a backup id to its directory, rejecting anything but the id format.
    fn backup_path(&self, backup_id: &str) -> Result<PathBuf, BackupError> {
        let valid = !backup_id.is_empty()
            && backup_id
                .chars()
                .all(|c| c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(BackupError::InvalidId(backup_id.to_string()));
        }

        Ok(self.backup_dir.join(backup_id))
    }
}

async fn user_records<C: ConnectionTrait>(db: &C) -> Result<Vec<UserRecord>, AppError> {
    let users = UserRepository::new(db).get_all().await?;

    Ok(users
        .into_iter()
        .map(|user| UserRecord {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role.as_str().to_string(),
        })
        .collect())
}

fn amount_record(amount: RecipeAmount) -> AmountRecord {
    AmountRecord {
        item_id: amount.item_id,
        amount: amount.amount,
    }
}

fn remap(ids: &HashMap<i32, i32>, kind: &'static str, id: i32) -> Result<i32, BackupError> {
    ids.get(&id)
        .copied()
        .ok_or(BackupError::MissingReference(kind, id))
}

fn remap_optional(
    ids: &HashMap<i32, i32>,
    kind: &'static str,
    id: Option<i32>,
) -> Result<Option<i32>, BackupError> {
    id.map(|id| remap(ids, kind, id)).transpose()
}

fn remap_all(
    ids: &HashMap<i32, i32>,
    kind: &'static str,
    old_ids: &[i32],
) -> Result<Vec<i32>, BackupError> {
    old_ids.iter().map(|id| remap(ids, kind, *id)).collect()
}

fn remap_recipe_amounts(
    item_ids: &HashMap<i32, i32>,
    amounts: &[AmountRecord],
) -> Result<Vec<RecipeAmount>, BackupError> {
    amounts
        .iter()
        .map(|amount| {
            Ok(RecipeAmount {
                item_id: remap(item_ids, "item", amount.item_id)?,
                amount: amount.amount,
            })
        })
        .collect()
}

fn remap_item_amounts(
    item_ids: &HashMap<i32, i32>,
    amounts: &[AmountRecord],
) -> Result<Vec<ItemAmount>, BackupError> {
    amounts
        .iter()
        .map(|amount| {
            Ok(ItemAmount {
                item_id: remap(item_ids, "item", amount.item_id)?,
                amount: amount.amount,
            })
        })
        .collect()
}

async fn path_exists(path: &Path) -> Result<bool, BackupError> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|source| BackupError::Io {
            path: path.display().to_string(),
            source,
        })
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BackupError> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| BackupError::Json {
        path: path.display().to_string(),
        source,
    })?;

    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| BackupError::Io {
            path: path.display().to_string(),
            source,
        })
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, BackupError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| BackupError::Io {
            path: path.display().to_string(),
            source,
        })?;

    serde_json::from_slice(&bytes).map_err(|source| BackupError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Reads a file added in a later backup version, treating its absence as empty.
async fn read_optional_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, BackupError> {
    if !path_exists(path).await? {
        return Ok(T::default());
    }

    read_json(path).await
}
