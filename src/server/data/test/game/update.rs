use super::*;

/// Tests updating a game's name, icon and categories.
///
/// Expected: Ok with the new values and only the new category linked
#[tokio::test]
async fn replaces_categories_and_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ores = factory::create_item_category(db).await?;
    let food = factory::create_item_category(db).await?;
    let icon = factory::create_image(db).await?;
    let game = factory::game::GameFactory::new(db)
        .category(ores.id)
        .build()
        .await?;

    let updated = GameRepository::new(db)
        .update(
            game.id,
            GameParam {
                name: "Renamed".to_string(),
                item_category_ids: vec![food.id],
                icon_id: Some(icon.id),
                banner_id: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.icon_id, Some(icon.id));
    let ids: Vec<i32> = updated.item_categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![food.id]);

    Ok(())
}

/// Tests deleting a game that has categories linked.
///
/// Expected: Ok(true) with the links gone and the categories kept
#[tokio::test]
async fn delete_removes_category_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ores = factory::create_item_category(db).await?;
    let game = factory::game::GameFactory::new(db)
        .category(ores.id)
        .build()
        .await?;

    assert!(GameRepository::new(db).delete(game.id).await?);

    assert_eq!(
        entity::prelude::GameItemCategory::find().count(db).await?,
        0
    );
    assert_eq!(entity::prelude::ItemCategory::find().count(db).await?, 1);

    Ok(())
}
