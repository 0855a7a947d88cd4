use super::*;

/// Tests storing an image and reading it back.
///
/// Expected: Ok with the file written as `<id>.webp` and the same bytes returned
#[tokio::test]
async fn stores_and_reads_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let image_dir = dir.path().join("images");

    let service = ImageService::new(db, &image_dir);
    let image = service
        .add_image(ImageType::Webp, "Banner".to_string(), b"webp-data")
        .await?;

    assert_eq!(image.path, format!("{}.webp", image.id));
    assert!(image_dir.join(&image.path).exists());

    let (stored, data) = service.get_image_data(image.id).await?;
    assert_eq!(stored, image);
    assert_eq!(data, b"webp-data");

    let listed = service.get_images().await?;
    assert_eq!(listed, vec![image]);

    Ok(())
}

/// Tests reading an image whose file was removed from disk.
///
/// Expected: Err(ImageErr Io)
#[tokio::test]
async fn missing_file_is_an_io_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let image = factory::create_image(db).await?;

    let result = ImageService::new(db, dir.path())
        .get_image_data(image.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ImageErr(ImageError::Io { .. }))
    ));

    Ok(())
}

/// Tests deleting an image a game still uses as its icon.
///
/// Expected: Err(BadRequest) with the row and file kept
#[tokio::test]
async fn refuses_to_delete_image_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let service = ImageService::new(db, dir.path());
    let image = service
        .add_image(ImageType::Png, "Icon".to_string(), b"png")
        .await?;
    factory::game::GameFactory::new(db)
        .icon(image.id)
        .build()
        .await?;

    let result = service.delete_image(image.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(dir.path().join(&image.path).exists());
    assert_eq!(entity::prelude::Image::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an unused image, then deleting it again.
///
/// Expected: Ok with row and file gone, then Err(NotFound Image)
#[tokio::test]
async fn deletes_unused_image() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let service = ImageService::new(db, dir.path());
    let image = service
        .add_image(ImageType::Jpeg, "Photo".to_string(), b"jpeg")
        .await?;

    service.delete_image(image.id).await?;

    assert!(!dir.path().join(&image.path).exists());
    assert!(matches!(
        service.delete_image(image.id).await,
        Err(AppError::NotFound {
            kind: EntityKind::Image,
            ..
        })
    ));

    Ok(())
}
