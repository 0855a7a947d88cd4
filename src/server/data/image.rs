//! Image metadata repository. File contents live on disk, see `ImageService`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::image::{ImageMetaData, ImageType};

pub struct ImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an image row. The path is empty until `set_path` is called.
    pub async fn create(
        &self,
        image_type: ImageType,
        description: String,
    ) -> Result<ImageMetaData, DbErr> {
        let entity = entity::image::ActiveModel {
            description: ActiveValue::Set(description),
            path: ActiveValue::Set(String::new()),
            image_type: ActiveValue::Set(image_type.code()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ImageMetaData {
            id: entity.id,
            description: entity.description,
            image_type,
            path: entity.path,
        })
    }

    /// Records the file name an image is stored under.
    ///
    /// # Returns
    /// - `Ok(true)` - Path updated
    /// - `Ok(false)` - No image with that id
    pub async fn set_path(&self, id: i32, path: String) -> Result<bool, DbErr> {
        let Some(image) = entity::prelude::Image::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active_model: entity::image::ActiveModel = image.into();
        active_model.path = ActiveValue::Set(path);
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Finds an image by id. Rows with an unknown type code are skipped.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ImageMetaData>, DbErr> {
        let entity = entity::prelude::Image::find_by_id(id).one(self.db).await?;

        Ok(entity.and_then(ImageMetaData::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<ImageMetaData>, DbErr> {
        let entities = entity::prelude::Image::find()
            .order_by_asc(entity::image::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter_map(ImageMetaData::from_entity)
            .collect())
    }

    /// Returns the subset of `ids` that has no image row.
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<i32> = entity::prelude::Image::find()
            .filter(entity::image::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|image| image.id)
            .collect();

        let mut missing: Vec<i32> = ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();

        Ok(missing)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Image::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any game or item still shows the image.
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let games = entity::prelude::Game::find()
            .filter(
                entity::game::Column::IconId
                    .eq(id)
                    .or(entity::game::Column::BannerId.eq(id)),
            )
            .count(self.db)
            .await?;
        let items = entity::prelude::Item::find()
            .filter(entity::item::Column::ImageId.eq(id))
            .count(self.db)
            .await?;

        Ok(games + items > 0)
    }
}
