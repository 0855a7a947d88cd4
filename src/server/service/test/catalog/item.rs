use super::*;

/// Tests creating an item for a game that does not exist.
///
/// Expected: Err(NotFound Game)
#[tokio::test]
async fn rejects_unknown_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ItemService::new(db)
        .create(ItemParam::new(12, "Iron"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Game,
            id: 12
        })
    ));

    Ok(())
}

/// Tests deleting an item that a collection group tracks.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn refuses_to_delete_tracked_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, item, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    factory::create_item_amount(db, group.id, item.id, 1).await?;

    let result = ItemService::new(db).delete(item.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating an item's categories and picture.
///
/// Expected: Ok with the new category list replacing the old one
#[tokio::test]
async fn update_replaces_categories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ores = factory::create_item_category(db).await?;
    let metal = factory::create_item_category(db).await?;
    let picture = factory::create_image(db).await?;
    let game = factory::create_game(db).await?;

    let service = ItemService::new(db);
    let item = service
        .create(ItemParam {
            category_ids: vec![ores.id],
            ..ItemParam::new(game.id, "Copper")
        })
        .await?;
    let updated = service
        .update(
            item.id,
            ItemParam {
                category_ids: vec![metal.id],
                image_id: Some(picture.id),
                ..ItemParam::new(game.id, "Copper ore")
            },
        )
        .await?;

    assert_eq!(updated.name, "Copper ore");
    assert_eq!(updated.image_id, Some(picture.id));
    let ids: Vec<i32> = updated.categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![metal.id]);
    assert_eq!(service.get(item.id).await?, updated);

    Ok(())
}
