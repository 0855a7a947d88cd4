use super::*;

/// Tests an image nothing shows.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unused_image_is_not_referenced() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let image = factory::create_image(db).await?;

    assert!(!ImageRepository::new(db).is_referenced(image.id).await?);

    Ok(())
}

/// Tests an image used only as a game banner.
///
/// Expected: Ok(true)
#[tokio::test]
async fn game_banner_references_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let image = factory::create_image(db).await?;
    factory::game::GameFactory::new(db)
        .banner(image.id)
        .build()
        .await?;

    assert!(ImageRepository::new(db).is_referenced(image.id).await?);

    Ok(())
}

/// Tests an image used only as an item picture.
///
/// Expected: Ok(true)
#[tokio::test]
async fn item_picture_references_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let image = factory::create_image(db).await?;
    let game = factory::create_game(db).await?;
    factory::item::ItemFactory::new(db, game.id)
        .image(image.id)
        .build()
        .await?;

    assert!(ImageRepository::new(db).is_referenced(image.id).await?);

    Ok(())
}
