use crate::model::item::{ItemCategoryDto, ItemDto, ItemRequestDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    pub categories: Vec<ItemCategory>,
    pub image_id: Option<i32>,
}

impl Item {
    /// Builds an item from its row and its linked categories.
    pub fn from_entity(entity: entity::item::Model, categories: Vec<ItemCategory>) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            name: entity.name,
            categories,
            image_id: entity.image_id,
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            game_id: self.game_id,
            name: self.name,
            categories: self
                .categories
                .into_iter()
                .map(ItemCategory::into_dto)
                .collect(),
            image: self.image_id,
        }
    }
}

/// Parameters for creating or updating an item.
///
/// On update `category_ids` replaces every category the item had.
#[derive(Debug, Clone, Default)]
pub struct ItemParam {
    pub game_id: i32,
    pub name: String,
    pub category_ids: Vec<i32>,
    pub image_id: Option<i32>,
}

impl ItemParam {
    pub fn new(game_id: i32, name: impl Into<String>) -> Self {
        Self {
            game_id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_dto(dto: ItemRequestDto) -> Self {
        Self {
            game_id: dto.game_id,
            name: dto.name,
            category_ids: dto.categories,
            image_id: dto.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCategory {
    pub id: i32,
    pub name: String,
}

impl ItemCategory {
    pub fn from_entity(entity: entity::item_category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ItemCategoryDto {
        ItemCategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}
