use crate::{
    model::game::{GameDto, GameRequestDto},
    server::model::item::ItemCategory,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub item_categories: Vec<ItemCategory>,
    pub icon_id: Option<i32>,
    pub banner_id: Option<i32>,
}

impl Game {
    /// Builds a game from its row and its linked categories.
    pub fn from_entity(entity: entity::game::Model, item_categories: Vec<ItemCategory>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            item_categories,
            icon_id: entity.icon_id,
            banner_id: entity.banner_id,
        }
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            item_categories: self
                .item_categories
                .into_iter()
                .map(ItemCategory::into_dto)
                .collect(),
            icon: self.icon_id,
            banner: self.banner_id,
        }
    }
}

/// Parameters for creating or updating a game.
#[derive(Debug, Clone, Default)]
pub struct GameParam {
    pub name: String,
    pub item_category_ids: Vec<i32>,
    pub icon_id: Option<i32>,
    pub banner_id: Option<i32>,
}

impl GameParam {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_dto(dto: GameRequestDto) -> Self {
        Self {
            name: dto.name,
            item_category_ids: dto.item_categories,
            icon_id: dto.icon,
            banner_id: dto.banner,
        }
    }

    /// Image ids the game refers to.
    pub fn image_ids(&self) -> Vec<i32> {
        self.icon_id.into_iter().chain(self.banner_id).collect()
    }
}
