//! Image store.
//!
//! Metadata lives in the `image` table and the file contents live in the image
//! directory as `<id>.<extension>`. A row is only committed once its file is written.

use std::path::Path;

use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::server::{
    data::image::ImageRepository,
    error::{image::ImageError, AppError, EntityKind},
    model::image::{ImageMetaData, ImageType},
};

pub struct ImageService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
    image_dir: &'a Path,
}

impl<'a, C: ConnectionTrait + TransactionTrait> ImageService<'a, C> {
    pub fn new(db: &'a C, image_dir: &'a Path) -> Self {
        Self { db, image_dir }
    }

    /// Stores an uploaded image.
    ///
    /// # Arguments
    /// - `image_type` - Format of `data`; decides the file extension
    /// - `description` - Free text shown next to the image
    /// - `data` - Raw file contents
    ///
    /// # Returns
    /// - `Ok(ImageMetaData)` - The stored image
    /// - `Err(AppError::ImageErr)` - The file could not be written; no row was kept
    pub async fn add_image(
        &self,
        image_type: ImageType,
        description: String,
        data: &[u8],
    ) -> Result<ImageMetaData, AppError> {
        let txn = self.db.begin().await?;
        let repo = ImageRepository::new(&txn);

        let mut image = repo.create(image_type, description).await?;
        let file_name = ImageMetaData::file_name(image.id, image_type);

        tokio::fs::create_dir_all(self.image_dir)
            .await
            .map_err(|source| ImageError::Io {
                path: self.image_dir.display().to_string(),
                source,
            })?;
        let path = self.image_dir.join(&file_name);
        tokio::fs::write(&path, data)
            .await
            .map_err(|source| ImageError::Io {
                path: path.display().to_string(),
                source,
            })?;

        repo.set_path(image.id, file_name.clone()).await?;
        image.path = file_name;

        txn.commit().await?;

        tracing::info!(
            "Stored image {} ({}, {} bytes)",
            image.id,
            image.image_type,
            data.len()
        );

        Ok(image)
    }

    /// Reads the metadata and file contents of an image.
    ///
    /// # Returns
    /// - `Ok((ImageMetaData, Vec<u8>))` - Metadata and raw bytes
    /// - `Err(AppError::NotFound)` - No image with that id
    /// - `Err(AppError::ImageErr)` - The file is missing or unreadable
    pub async fn get_image_data(&self, id: i32) -> Result<(ImageMetaData, Vec<u8>), AppError> {
        let image = ImageRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Image, id))?;

        let path = self.image_dir.join(&image.path);
        let data = tokio::fs::read(&path)
            .await
            .map_err(|source| ImageError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Ok((image, data))
    }

    pub async fn get_images(&self) -> Result<Vec<ImageMetaData>, AppError> {
        Ok(ImageRepository::new(self.db).get_all().await?)
    }

    /// Deletes an image row and its file.
    ///
    /// # Returns
    /// - `Ok(())` - Image deleted; a file that was already gone is ignored
    /// - `Err(AppError::NotFound)` - No image with that id
    /// - `Err(AppError::BadRequest)` - A game or item still shows the image
    pub async fn delete_image(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ImageRepository::new(&txn);

        let image = repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(EntityKind::Image, id))?;
        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(format!(
                "Image {} is still used by a game or item",
                id
            )));
        }

        repo.delete(id).await?;
        txn.commit().await?;

        let path = self.image_dir.join(&image.path);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Image file {} was already missing", path.display());
            }
            Err(source) => {
                return Err(ImageError::Io {
                    path: path.display().to_string(),
                    source,
                }
                .into())
            }
        }

        tracing::info!("Deleted image {}", id);

        Ok(())
    }
}

/// Fails with `NotFound` naming the lowest image id that has no row.
pub(crate) async fn ensure_images_exist<C: ConnectionTrait>(
    db: &C,
    image_ids: &[i32],
) -> Result<(), AppError> {
    if let Some(missing) = ImageRepository::new(db).find_missing(image_ids).await?.first() {
        return Err(AppError::not_found(EntityKind::Image, *missing));
    }

    Ok(())
}
