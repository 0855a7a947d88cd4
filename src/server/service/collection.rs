//! Collection store.
//!
//! Owns every write to collections, groups, item amounts and group preferences. Each
//! operation opens its own transaction, so a failure at any step rolls back all writes
//! made by that operation. When the service is built on an open transaction the
//! operations run as savepoints inside it.
//!
//! The viewing user is always passed explicitly; groups are hydrated with that user's
//! preferences only.

use std::collections::{BTreeMap, HashMap};

use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::server::{
    data::{
        collection::{
            CollectionRepository, GroupRepository, ItemAmountRepository, PreferenceRepository,
        },
        game::GameRepository,
        item::ItemRepository,
        recipe::RecipeRepository,
        user::UserRepository,
    },
    error::{AppError, EntityKind},
    model::collection::{
        Collection, CollectionsGroupPreference, CreateCollectionParam, Group, GroupPreferences,
        ItemAmount, NewGroupParam, UpdateCollectionParam, UpdateGroupPreferencesParam,
    },
};

pub struct CollectionService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> CollectionService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a collection with its initial groups and item amounts.
    ///
    /// # Arguments
    /// - `param` - Owner, game, name and the groups to create
    ///
    /// # Returns
    /// - `Ok(Collection)` - The new collection hydrated for its owner
    /// - `Err(AppError::NotFound)` - Owner, game or an item does not exist
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn add_collection(&self, param: CreateCollectionParam) -> Result<Collection, AppError> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn)
            .find_by_id(param.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(EntityKind::User, param.user_id));
        }
        ensure_game_exists(&txn, param.game_id).await?;

        let collection = CollectionRepository::new(&txn)
            .create(param.user_id, param.game_id, param.name)
            .await?;

        for group in param.groups {
            create_group(&txn, collection.id, group).await?;
        }

        let mut hydrated = CollectionRepository::new(&txn)
            .hydrate(vec![collection], param.user_id)
            .await?;
        let collection = hydrated
            .pop()
            .ok_or_else(|| AppError::InternalError("Collection missing after insert".to_string()))?;

        txn.commit().await?;

        tracing::info!(
            "Created collection {} for user {} with {} groups",
            collection.id,
            collection.user_id,
            collection.groups.len()
        );

        Ok(collection)
    }

    /// Updates a collection's name, game and optionally its group list.
    ///
    /// When `param.groups` is supplied, groups missing from it are deleted with their
    /// preferences, entries without an id become new groups, and every listed group has
    /// its item amounts replaced by the listed ones. Preferences of kept groups stay.
    ///
    /// # Returns
    /// - `Ok(Collection)` - The updated collection hydrated for `viewer_id`
    /// - `Err(AppError::NotFound)` - Collection, game, a listed group or an item is missing
    pub async fn update_collection(
        &self,
        viewer_id: i32,
        collection_id: i32,
        param: UpdateCollectionParam,
    ) -> Result<Collection, AppError> {
        let txn = self.db.begin().await?;
        let collection_repo = CollectionRepository::new(&txn);

        if collection_repo.find_by_id(collection_id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::Collection, collection_id));
        }
        if let Some(game_id) = param.game_id {
            ensure_game_exists(&txn, game_id).await?;
        }

        let collection = collection_repo
            .update(collection_id, param.name, param.game_id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Collection, collection_id))?;

        if let Some(entries) = param.groups {
            let group_repo = GroupRepository::new(&txn);
            let existing: Vec<i32> = group_repo
                .get_by_collections(&[collection_id])
                .await?
                .into_iter()
                .map(|group| group.id)
                .collect();

            let kept: Vec<i32> = entries.iter().filter_map(|entry| entry.id).collect();
            if let Some(unknown) = kept.iter().find(|id| !existing.contains(id)) {
                return Err(AppError::not_found(EntityKind::Group, *unknown));
            }

            let item_ids: Vec<i32> = entries
                .iter()
                .flat_map(|entry| entry.item_amounts.iter().map(|amount| amount.item_id))
                .collect();
            ensure_items_exist(&txn, &item_ids).await?;

            let removed: Vec<i32> = existing
                .into_iter()
                .filter(|id| !kept.contains(id))
                .collect();
            group_repo.delete_cascade(&removed).await?;

            let amount_repo = ItemAmountRepository::new(&txn);
            for entry in entries {
                match entry.id {
                    Some(group_id) => {
                        group_repo.rename(group_id, entry.name).await?;
                        amount_repo.delete_by_groups(&[group_id]).await?;
                        write_item_amounts(&txn, group_id, &entry.item_amounts).await?;
                    }
                    None => {
                        create_group(
                            &txn,
                            collection_id,
                            NewGroupParam {
                                name: entry.name,
                                item_amounts: entry.item_amounts,
                            },
                        )
                        .await?;
                    }
                }
            }

            tracing::debug!(
                "Reconciled groups of collection {}: removed {:?}",
                collection_id,
                removed
            );
        }

        let mut hydrated = collection_repo.hydrate(vec![collection], viewer_id).await?;
        let collection = hydrated
            .pop()
            .ok_or(AppError::not_found(EntityKind::Collection, collection_id))?;

        txn.commit().await?;

        Ok(collection)
    }

    /// Deletes a collection with all its groups, item amounts and preferences.
    ///
    /// # Returns
    /// - `Ok(())` - Collection deleted
    /// - `Err(AppError::NotFound)` - No collection with that id
    pub async fn delete_collection(&self, collection_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let collection_repo = CollectionRepository::new(&txn);

        if collection_repo.find_by_id(collection_id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::Collection, collection_id));
        }

        let group_repo = GroupRepository::new(&txn);
        let group_ids: Vec<i32> = group_repo
            .get_by_collections(&[collection_id])
            .await?
            .into_iter()
            .map(|group| group.id)
            .collect();
        group_repo.delete_cascade(&group_ids).await?;
        collection_repo.delete(collection_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted collection {} and {} groups",
            collection_id,
            group_ids.len()
        );

        Ok(())
    }

    /// Lists the collections of an owner, optionally for one game, hydrated for the owner.
    pub async fn get_collections(
        &self,
        user_id: i32,
        game_id: Option<i32>,
    ) -> Result<Vec<Collection>, AppError> {
        let txn = self.db.begin().await?;
        let collection_repo = CollectionRepository::new(&txn);

        let collections = collection_repo.get_by_owner(user_id, game_id).await?;
        let collections = collection_repo.hydrate(collections, user_id).await?;

        txn.commit().await?;

        Ok(collections)
    }

    /// Lists every collection of every user, hydrated for `viewer_id`.
    pub async fn get_all_collections(&self, viewer_id: i32) -> Result<Vec<Collection>, AppError> {
        let txn = self.db.begin().await?;
        let collection_repo = CollectionRepository::new(&txn);

        let collections = collection_repo.get_all().await?;
        let collections = collection_repo.hydrate(collections, viewer_id).await?;

        txn.commit().await?;

        Ok(collections)
    }

    /// Gets one collection hydrated for `viewer_id`.
    ///
    /// # Returns
    /// - `Ok(Collection)` - The collection
    /// - `Err(AppError::NotFound)` - No collection with that id
    pub async fn get_collection(
        &self,
        viewer_id: i32,
        collection_id: i32,
    ) -> Result<Collection, AppError> {
        let txn = self.db.begin().await?;
        let collection_repo = CollectionRepository::new(&txn);

        let collection = collection_repo
            .find_by_id(collection_id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Collection, collection_id))?;
        let collection = collection_repo
            .hydrate(vec![collection], viewer_id)
            .await?
            .pop()
            .ok_or(AppError::not_found(EntityKind::Collection, collection_id))?;

        txn.commit().await?;

        Ok(collection)
    }

    /// Returns the owner of a collection.
    pub async fn get_collection_owner(&self, collection_id: i32) -> Result<i32, AppError> {
        let collection = CollectionRepository::new(self.db)
            .find_by_id(collection_id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Collection, collection_id))?;

        Ok(collection.user_id)
    }

    /// Returns the collection a group belongs to.
    pub async fn get_group_collection(&self, group_id: i32) -> Result<i32, AppError> {
        let group = GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Group, group_id))?;

        Ok(group.collection_id)
    }

    /// Adds a group with its item amounts to a collection.
    ///
    /// # Returns
    /// - `Ok(Group)` - The new group hydrated for `viewer_id`
    /// - `Err(AppError::NotFound)` - Collection or an item does not exist
    pub async fn add_group(
        &self,
        viewer_id: i32,
        collection_id: i32,
        param: NewGroupParam,
    ) -> Result<Group, AppError> {
        let txn = self.db.begin().await?;

        if CollectionRepository::new(&txn)
            .find_by_id(collection_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(EntityKind::Collection, collection_id));
        }

        let group = create_group(&txn, collection_id, param).await?;
        let group = GroupRepository::new(&txn)
            .hydrate_one(&group, viewer_id)
            .await?;

        txn.commit().await?;

        tracing::info!("Added group {} to collection {}", group.id, collection_id);

        Ok(group)
    }

    /// Renames a group.
    pub async fn update_group(
        &self,
        viewer_id: i32,
        group_id: i32,
        name: String,
    ) -> Result<Group, AppError> {
        let txn = self.db.begin().await?;
        let group_repo = GroupRepository::new(&txn);

        let group = group_repo
            .rename(group_id, name)
            .await?
            .ok_or(AppError::not_found(EntityKind::Group, group_id))?;
        let group = group_repo.hydrate_one(&group, viewer_id).await?;

        txn.commit().await?;

        Ok(group)
    }

    /// Deletes a group with its item amounts and every user's preferences for it.
    pub async fn delete_group(&self, group_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let group_repo = GroupRepository::new(&txn);

        if group_repo.find_by_id(group_id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::Group, group_id));
        }
        group_repo.delete_cascade(&[group_id]).await?;

        txn.commit().await?;

        tracing::info!("Deleted group {}", group_id);

        Ok(())
    }

    /// Gets one group hydrated for `viewer_id`.
    pub async fn get_group(&self, viewer_id: i32, group_id: i32) -> Result<Group, AppError> {
        let txn = self.db.begin().await?;
        let group_repo = GroupRepository::new(&txn);

        let group = group_repo
            .find_by_id(group_id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Group, group_id))?;
        let group = group_repo.hydrate_one(&group, viewer_id).await?;

        txn.commit().await?;

        Ok(group)
    }

    /// Sets the amount of an item in a group, inserting or overwriting the row.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group hydrated for `viewer_id`
    /// - `Err(AppError::NotFound)` - Group or item does not exist
    pub async fn update_item_amount(
        &self,
        viewer_id: i32,
        group_id: i32,
        item_id: i32,
        amount: i32,
    ) -> Result<Group, AppError> {
        let txn = self.db.begin().await?;
        let group_repo = GroupRepository::new(&txn);

        let group = group_repo
            .find_by_id(group_id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Group, group_id))?;
        ensure_items_exist(&txn, &[item_id]).await?;

        ItemAmountRepository::new(&txn)
            .upsert(group_id, item_id, amount)
            .await?;
        let group = group_repo.hydrate_one(&group, viewer_id).await?;

        txn.commit().await?;

        Ok(group)
    }

    /// Removes an item from a group.
    ///
    /// Removing an item the group holds no amount for leaves the group unchanged.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group hydrated for `viewer_id`
    /// - `Err(AppError::NotFound)` - Group or item does not exist
    pub async fn delete_item_amount(
        &self,
        viewer_id: i32,
        group_id: i32,
        item_id: i32,
    ) -> Result<Group, AppError> {
        let txn = self.db.begin().await?;
        let group_repo = GroupRepository::new(&txn);

        let group = group_repo
            .find_by_id(group_id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Group, group_id))?;

        ensure_items_exist(&txn, &[item_id]).await?;

        let removed = ItemAmountRepository::new(&txn)
            .delete(group_id, item_id)
            .await?;
        if !removed {
            tracing::debug!("Group {} held no amount for item {}", group_id, item_id);
        }
        let group = group_repo.hydrate_one(&group, viewer_id).await?;

        txn.commit().await?;

        Ok(group)
    }

    /// Stores the preferences of `viewer_id` for a group.
    ///
    /// Display settings are upserted. The item recipe choices replace every choice the
    /// viewer previously made for the group. A `None` recipe records an explicit
    /// "no recipe" choice.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group hydrated for `viewer_id`
    /// - `Err(AppError::NotFound)` - Collection missing, group missing or not part of the
    ///   collection, unknown item key or unknown recipe value
    pub async fn update_group_preferences(
        &self,
        viewer_id: i32,
        collection_id: i32,
        group_id: i32,
        param: UpdateGroupPreferencesParam,
    ) -> Result<Group, AppError> {
        let txn = self.db.begin().await?;

        if CollectionRepository::new(&txn)
            .find_by_id(collection_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(EntityKind::Collection, collection_id));
        }

        let group_repo = GroupRepository::new(&txn);
        let group = group_repo
            .find_by_id(group_id)
            .await?
            .filter(|group| group.collection_id == collection_id)
            .ok_or(AppError::not_found(EntityKind::Group, group_id))?;

        let item_ids: Vec<i32> = param.item_recipe_preferences.keys().copied().collect();
        ensure_items_exist(&txn, &item_ids).await?;

        let recipe_ids: Vec<i32> = param
            .item_recipe_preferences
            .values()
            .filter_map(|recipe_id| *recipe_id)
            .collect();
        if let Some(missing) = RecipeRepository::new(&txn)
            .find_missing(&recipe_ids)
            .await?
            .first()
        {
            return Err(AppError::not_found(EntityKind::Recipe, *missing));
        }

        let preference_repo = PreferenceRepository::new(&txn);
        preference_repo
            .upsert_group_preference(group_id, viewer_id, param.preferences)
            .await?;
        preference_repo
            .replace_item_preferences(group_id, viewer_id, &param.item_recipe_preferences)
            .await?;

        let group = group_repo.hydrate_one(&group, viewer_id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Updated preferences of user {} for group {}",
            viewer_id,
            group_id
        );

        Ok(group)
    }

    /// Exports every stored (user, group) preference pairing with its item choices.
    pub async fn get_collections_group_preference(
        &self,
    ) -> Result<Vec<CollectionsGroupPreference>, AppError> {
        let txn = self.db.begin().await?;
        let preference_repo = PreferenceRepository::new(&txn);

        let rows = preference_repo.get_all_group_preferences().await?;

        let mut collection_of_group: HashMap<i32, i32> = HashMap::new();
        for row in &rows {
            if collection_of_group.contains_key(&row.group_id) {
                continue;
            }
            let group = GroupRepository::new(&txn)
                .find_by_id(row.group_id)
                .await?
                .ok_or(AppError::not_found(EntityKind::Group, row.group_id))?;
            collection_of_group.insert(group.id, group.collection_id);
        }

        let mut exported = Vec::with_capacity(rows.len());
        for row in rows {
            let group_item_preferences: BTreeMap<i32, Option<i32>> = preference_repo
                .get_item_preferences(&[row.group_id], row.user_id)
                .await?
                .into_iter()
                .map(|item| (item.item_id, item.recipe_id))
                .collect();

            exported.push(CollectionsGroupPreference {
                user_id: row.user_id,
                collection_id: collection_of_group
                    .get(&row.group_id)
                    .copied()
                    .ok_or(AppError::not_found(EntityKind::Group, row.group_id))?,
                group_id: row.group_id,
                preferences: GroupPreferences::from_entity(&row),
                group_item_preferences,
            });
        }

        txn.commit().await?;

        Ok(exported)
    }
}

async fn ensure_game_exists<C: ConnectionTrait>(db: &C, game_id: i32) -> Result<(), AppError> {
    if GameRepository::new(db).find_by_id(game_id).await?.is_none() {
        return Err(AppError::not_found(EntityKind::Game, game_id));
    }

    Ok(())
}

async fn ensure_items_exist<C: ConnectionTrait>(db: &C, item_ids: &[i32]) -> Result<(), AppError> {
    if let Some(missing) = ItemRepository::new(db).find_missing(item_ids).await?.first() {
        return Err(AppError::not_found(EntityKind::Item, *missing));
    }

    Ok(())
}

/// Creates a group row, then validates and writes its item amounts.
async fn create_group<C: ConnectionTrait>(
    db: &C,
    collection_id: i32,
    param: NewGroupParam,
) -> Result<entity::collection_group::Model, AppError> {
    let group = GroupRepository::new(db)
        .create(collection_id, param.name)
        .await?;

    write_item_amounts(db, group.id, &param.item_amounts).await?;

    Ok(group)
}

async fn write_item_amounts<C: ConnectionTrait>(
    db: &C,
    group_id: i32,
    item_amounts: &[ItemAmount],
) -> Result<(), AppError> {
    let item_ids: Vec<i32> = item_amounts.iter().map(|amount| amount.item_id).collect();
    ensure_items_exist(db, &item_ids).await?;

    let amount_repo = ItemAmountRepository::new(db);
    for amount in item_amounts {
        amount_repo
            .upsert(group_id, amount.item_id, amount.amount)
            .await?;
    }

    Ok(())
}
