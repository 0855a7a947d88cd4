use super::*;

/// Tests adding a group with item amounts to an existing collection.
///
/// Expected: Ok with the group attached to the collection, its amounts ordered by
/// item id and default preferences for the viewer
#[tokio::test]
async fn adds_group_with_amounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, ore, collection, _) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let wood = factory::create_item(db, game.id).await?;

    let service = CollectionService::new(db);
    let group = service
        .add_group(
            owner.id,
            collection.id,
            group_param("Workbench", vec![amount(wood.id, 4), amount(ore.id, 2)]),
        )
        .await?;

    assert_eq!(group.collection_id, collection.id);
    assert_eq!(group.name, "Workbench");
    assert_eq!(
        group.item_amounts,
        vec![amount(ore.id, 2), amount(wood.id, 4)]
    );
    assert_eq!(group.preferences, GroupPreferences::default());

    let reloaded = service.get_collection(owner.id, collection.id).await?;
    assert_eq!(reloaded.groups.len(), 2);
    assert!(reloaded.groups.contains(&group));

    Ok(())
}

/// Tests adding a group to a collection that does not exist.
///
/// Expected: Err(NotFound Collection) and no group row written
#[tokio::test]
async fn unknown_collection_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let result = CollectionService::new(db)
        .add_group(owner.id, 404, group_param("Orphan", Vec::new()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Collection,
            id: 404
        })
    ));
    assert_eq!(entity::prelude::CollectionGroup::find().count(db).await?, 0);

    Ok(())
}

/// Tests adding a group whose amounts name an unknown item.
///
/// Expected: Err(NotFound Item) and the group row rolled back
#[tokio::test]
async fn unknown_item_rolls_back_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, collection, _) =
        factory::helpers::create_group_with_dependencies(db).await?;

    let result = CollectionService::new(db)
        .add_group(
            owner.id,
            collection.id,
            group_param("Broken", vec![amount(777, 1)]),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Item,
            id: 777
        })
    ));
    assert_eq!(entity::prelude::CollectionGroup::find().count(db).await?, 1);

    Ok(())
}
