//! Image factory for creating image metadata rows.
//!
//! Only the database row is created; tests that read image bytes write the file
//! themselves.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test image rows.
pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    description: String,
    image_type: i32,
    path: Option<String>,
}

impl<'a> ImageFactory<'a> {
    /// Creates a new ImageFactory for a PNG described as `"Image {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            description: format!("Image {}", next_id()),
            image_type: 1,
            path: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the stored type code (1 = png, 2 = webp, 3 = jpeg).
    pub fn image_type(mut self, image_type: i32) -> Self {
        self.image_type = image_type;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Builds and inserts the image row.
    ///
    /// Without an explicit path the file name is derived from the description.
    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        let path = self
            .path
            .unwrap_or_else(|| format!("{}.png", self.description.replace(' ', "_")));

        entity::image::ActiveModel {
            description: ActiveValue::Set(self.description),
            path: ActiveValue::Set(path),
            image_type: ActiveValue::Set(self.image_type),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image row with default values.
pub async fn create_image(db: &DatabaseConnection) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db).build().await
}
