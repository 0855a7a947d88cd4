use super::*;

/// Tests creating a collection with one group and reading it back.
///
/// Verifies that the created collection contains the group with its item amount,
/// that the owner finds it when listing by game, and that another user does not.
///
/// Expected: Ok with one "Smithy" group holding the amount
#[tokio::test]
async fn creates_collection_visible_to_owner_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let item = factory::create_item(db, game.id).await?;

    let service = CollectionService::new(db);
    let collection = service
        .add_collection(CreateCollectionParam {
            user_id: owner.id,
            game_id: game.id,
            name: "Base".to_string(),
            groups: vec![group_param("Smithy", vec![amount(item.id, 10)])],
        })
        .await?;

    assert_eq!(collection.name, "Base");
    assert_eq!(collection.user_id, owner.id);
    assert_eq!(collection.groups.len(), 1);
    assert_eq!(collection.groups[0].name, "Smithy");
    assert_eq!(collection.groups[0].item_amounts, vec![amount(item.id, 10)]);

    let owned = service.get_collections(owner.id, Some(game.id)).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, collection.id);

    let foreign = service.get_collections(other.id, Some(game.id)).await?;
    assert!(foreign.is_empty());

    Ok(())
}

/// Tests that an unknown item in a later group rolls back the whole creation.
///
/// The first group is valid and is written before the second group fails.
///
/// Expected: Err(NotFound Item) and no collection, group or amount rows left
#[tokio::test]
async fn unknown_item_rolls_back_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let item = factory::create_item(db, game.id).await?;

    let result = CollectionService::new(db)
        .add_collection(CreateCollectionParam {
            user_id: owner.id,
            game_id: game.id,
            name: "Base".to_string(),
            groups: vec![
                group_param("Smithy", vec![amount(item.id, 10)]),
                group_param("Mill", vec![amount(4242, 1)]),
            ],
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Item,
            id: 4242
        })
    ));
    assert_eq!(entity::prelude::Collection::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CollectionGroup::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::CollectionItemAmount::find().count(db).await?,
        0
    );

    Ok(())
}

/// Tests creating a collection for a game that does not exist.
///
/// Expected: Err(NotFound Game)
#[tokio::test]
async fn unknown_game_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let result = CollectionService::new(db)
        .add_collection(CreateCollectionParam {
            user_id: owner.id,
            game_id: 77,
            name: "Base".to_string(),
            groups: Vec::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Game,
            id: 77
        })
    ));

    Ok(())
}
