use super::*;

/// Tests deleting a group that several users hold preferences for.
///
/// Expected: Ok, group gone, and no preference rows of any user left for it
#[tokio::test]
async fn delete_group_removes_every_users_preferences() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, item, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let viewer = factory::create_user(db).await?;
    factory::create_item_amount(db, group.id, item.id, 2).await?;
    for user_id in [owner.id, viewer.id] {
        factory::collection::create_group_preference(db, group.id, user_id, 0.9).await?;
        factory::collection::create_group_item_preference(db, group.id, user_id, item.id, None)
            .await?;
    }

    let service = CollectionService::new(db);
    service.delete_group(group.id).await?;

    assert!(matches!(
        service.get_group(owner.id, group.id).await,
        Err(AppError::NotFound {
            kind: EntityKind::Group,
            ..
        })
    ));
    assert_eq!(entity::prelude::GroupPreference::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::GroupItemPreference::find().count(db).await?,
        0
    );
    assert_eq!(
        entity::prelude::CollectionItemAmount::find().count(db).await?,
        0
    );

    Ok(())
}

/// Tests deleting a collection with two groups.
///
/// Expected: Ok and no rows of the collection left; another collection is untouched
#[tokio::test]
async fn delete_collection_cascades_to_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, item, collection, first) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let second = factory::create_group(db, collection.id).await?;
    let viewer = factory::create_user(db).await?;
    factory::create_item_amount(db, first.id, item.id, 1).await?;
    factory::create_item_amount(db, second.id, item.id, 1).await?;
    factory::collection::create_group_preference(db, second.id, viewer.id, 0.5).await?;

    let survivor = factory::create_collection(db, owner.id, game.id).await?;
    let survivor_group = factory::create_group(db, survivor.id).await?;
    factory::create_item_amount(db, survivor_group.id, item.id, 7).await?;

    let service = CollectionService::new(db);
    service.delete_collection(collection.id).await?;

    assert!(matches!(
        service.get_collection(owner.id, collection.id).await,
        Err(AppError::NotFound {
            kind: EntityKind::Collection,
            ..
        })
    ));
    assert_eq!(entity::prelude::CollectionGroup::find().count(db).await?, 1);
    assert_eq!(entity::prelude::GroupPreference::find().count(db).await?, 0);

    let remaining = service.get_collection(owner.id, survivor.id).await?;
    assert_eq!(remaining.groups[0].item_amounts, vec![amount(item.id, 7)]);

    Ok(())
}

/// Tests deleting a collection that does not exist.
///
/// Expected: Err(NotFound Collection)
#[tokio::test]
async fn delete_missing_collection_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CollectionService::new(db).delete_collection(404).await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Collection,
            id: 404
        })
    ));

    Ok(())
}
