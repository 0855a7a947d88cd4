//! Collection domain models, parameters and the per-viewer group projection.
//!
//! Collections, groups and item amounts are shared by everyone who can read them.
//! Group preferences are stored per viewing user and overlaid on a group when it is
//! read, see [`project_group`].

use std::collections::BTreeMap;

use crate::model::collection::{
    CollectionDto, GroupDto, ItemAmountDto, NewAdminCollectionDto, NewCollectionDto, NewGroupDto,
    UpdateCollectionDto, UpdateCollectionGroupDto, UpdateGroupPreferencesDto,
};

/// Target quantity of one item inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemAmount {
    pub item_id: i32,
    pub amount: i32,
}

impl ItemAmount {
    pub fn from_entity(entity: &entity::collection_item_amount::Model) -> Self {
        Self {
            item_id: entity.item_id,
            amount: entity.amount,
        }
    }

    pub fn from_dto(dto: ItemAmountDto) -> Self {
        Self {
            item_id: dto.item_id,
            amount: dto.amount,
        }
    }

    pub fn into_dto(self) -> ItemAmountDto {
        ItemAmountDto {
            item_id: self.item_id,
            amount: self.amount,
        }
    }
}

/// Display settings a viewer chose for a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupPreferences {
    pub show_base_ingredients: bool,
    pub collapse_ingredients: bool,
    pub cost_reduction: f32,
}

impl Default for GroupPreferences {
    fn default() -> Self {
        Self {
            show_base_ingredients: false,
            collapse_ingredients: true,
            cost_reduction: 1.0,
        }
    }
}

impl GroupPreferences {
    pub fn from_entity(entity: &entity::group_preference::Model) -> Self {
        Self {
            show_base_ingredients: entity.show_base_ingredients,
            collapse_ingredients: entity.collapse_ingredients,
            cost_reduction: entity.cost_reduction,
        }
    }
}

/// A group as seen by one viewing user.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub collection_id: i32,
    pub name: String,
    /// Shared item amounts, ordered by item id.
    pub item_amounts: Vec<ItemAmount>,
    pub preferences: GroupPreferences,
    /// Item id to chosen recipe. `None` records an explicit "no recipe" choice.
    pub item_recipe_preferences: BTreeMap<i32, Option<i32>>,
}

impl Group {
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            collection_id: self.collection_id,
            name: self.name,
            item_amounts: self
                .item_amounts
                .into_iter()
                .map(ItemAmount::into_dto)
                .collect(),
            show_base_ingredients: self.preferences.show_base_ingredients,
            collapse_ingredients: self.preferences.collapse_ingredients,
            cost_reduction: self.preferences.cost_reduction,
            item_recipe_preference_map: self.item_recipe_preferences,
        }
    }
}

/// A collection with every group hydrated for one viewing user.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    pub name: String,
    /// Groups in creation (id) order.
    pub groups: Vec<Group>,
}

impl Collection {
    pub fn from_entity(entity: entity::collection::Model, groups: Vec<Group>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            game_id: entity.game_id,
            name: entity.name,
            groups,
        }
    }

    pub fn into_dto(self) -> CollectionDto {
        CollectionDto {
            id: self.id,
            user_id: self.user_id,
            game_id: self.game_id,
            name: self.name,
            groups: self.groups.into_iter().map(Group::into_dto).collect(),
        }
    }
}

/// Export row pairing one user with one group they hold preferences for.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionsGroupPreference {
    pub user_id: i32,
    pub collection_id: i32,
    pub group_id: i32,
    pub preferences: GroupPreferences,
    pub group_item_preferences: BTreeMap<i32, Option<i32>>,
}

/// Assembles the view of a group for the viewer whose preference rows are passed in.
///
/// Rows belonging to other groups are ignored, so callers may pass the rows of a
/// whole collection. The preference rows must already be restricted to one viewer.
/// A missing preference row yields [`GroupPreferences::default`].
pub fn project_group(
    group: &entity::collection_group::Model,
    item_amounts: &[entity::collection_item_amount::Model],
    preference: Option<&entity::group_preference::Model>,
    item_preferences: &[entity::group_item_preference::Model],
) -> Group {
    let mut amounts: Vec<ItemAmount> = item_amounts
        .iter()
        .filter(|row| row.group_id == group.id)
        .map(ItemAmount::from_entity)
        .collect();
    amounts.sort_by_key(|amount| amount.item_id);

    let preferences = preference
        .filter(|row| row.group_id == group.id)
        .map(GroupPreferences::from_entity)
        .unwrap_or_default();

    let item_recipe_preferences = item_preferences
        .iter()
        .filter(|row| row.group_id == group.id)
        .map(|row| (row.item_id, row.recipe_id))
        .collect();

    Group {
        id: group.id,
        collection_id: group.collection_id,
        name: group.name.clone(),
        item_amounts: amounts,
        preferences,
        item_recipe_preferences,
    }
}

/// Group to create together with its initial item amounts.
#[derive(Debug, Clone)]
pub struct NewGroupParam {
    pub name: String,
    pub item_amounts: Vec<ItemAmount>,
}

impl NewGroupParam {
    pub fn from_dto(dto: NewGroupDto) -> Self {
        Self {
            name: dto.name,
            item_amounts: dto
                .item_amounts
                .into_iter()
                .map(ItemAmount::from_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a collection.
#[derive(Debug, Clone)]
pub struct CreateCollectionParam {
    pub user_id: i32,
    pub game_id: i32,
    pub name: String,
    pub groups: Vec<NewGroupParam>,
}

impl CreateCollectionParam {
    /// Builds the parameters for a collection owned by the requesting user.
    pub fn from_dto(user_id: i32, dto: NewCollectionDto) -> Self {
        Self {
            user_id,
            game_id: dto.game_id,
            name: dto.name,
            groups: dto.groups.into_iter().map(NewGroupParam::from_dto).collect(),
        }
    }

    /// Builds the parameters for a collection created by an admin on behalf of a user.
    pub fn from_admin_dto(dto: NewAdminCollectionDto) -> Self {
        Self {
            user_id: dto.user_id,
            game_id: dto.game_id,
            name: dto.name,
            groups: dto.groups.into_iter().map(NewGroupParam::from_dto).collect(),
        }
    }
}

/// Group entry of a collection update.
#[derive(Debug, Clone)]
pub struct UpdateGroupEntry {
    /// Existing group to keep, or `None` to create a new one.
    pub id: Option<i32>,
    pub name: String,
    pub item_amounts: Vec<ItemAmount>,
}

impl UpdateGroupEntry {
    pub fn from_dto(dto: UpdateCollectionGroupDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            item_amounts: dto
                .item_amounts
                .into_iter()
                .map(ItemAmount::from_dto)
                .collect(),
        }
    }
}

/// Parameters for updating a collection.
#[derive(Debug, Clone)]
pub struct UpdateCollectionParam {
    pub name: String,
    pub game_id: Option<i32>,
    pub groups: Option<Vec<UpdateGroupEntry>>,
}

impl UpdateCollectionParam {
    pub fn from_dto(dto: UpdateCollectionDto) -> Self {
        Self {
            name: dto.name,
            game_id: dto.game_id,
            groups: dto
                .groups
                .map(|groups| groups.into_iter().map(UpdateGroupEntry::from_dto).collect()),
        }
    }
}

/// Parameters for replacing a viewer's preferences on a group.
#[derive(Debug, Clone)]
pub struct UpdateGroupPreferencesParam {
    pub preferences: GroupPreferences,
    pub item_recipe_preferences: BTreeMap<i32, Option<i32>>,
}

impl UpdateGroupPreferencesParam {
    pub fn from_dto(dto: UpdateGroupPreferencesDto) -> Self {
        Self {
            preferences: GroupPreferences {
                show_base_ingredients: dto.show_base_ingredients,
                collapse_ingredients: dto.collapse_ingredients,
                cost_reduction: dto.cost_reduction,
            },
            item_recipe_preferences: dto.item_recipe_preference_map,
        }
    }
}
