use super::*;

/// Tests reconciling the group list of a collection.
///
/// The collection has groups A and B, both with preferences of two users. The
/// update keeps A (renamed, with new amounts), drops B and adds C.
///
/// Expected: Ok with groups A and C; B and all its preference rows are gone while
/// A keeps its preferences
#[tokio::test]
async fn reconciles_groups_and_keeps_preferences_of_kept_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, item, collection, kept) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let viewer = factory::create_user(db).await?;
    let dropped = factory::create_group(db, collection.id).await?;
    let other_item = factory::create_item(db, game.id).await?;

    factory::create_item_amount(db, kept.id, item.id, 3).await?;
    factory::create_item_amount(db, dropped.id, item.id, 8).await?;
    for user_id in [owner.id, viewer.id] {
        factory::collection::create_group_preference(db, kept.id, user_id, 0.5).await?;
        factory::collection::create_group_preference(db, dropped.id, user_id, 0.5).await?;
        factory::collection::create_group_item_preference(db, dropped.id, user_id, item.id, None)
            .await?;
    }

    let updated = CollectionService::new(db)
        .update_collection(
            owner.id,
            collection.id,
            UpdateCollectionParam {
                name: "Renamed".to_string(),
                game_id: None,
                groups: Some(vec![
                    UpdateGroupEntry {
                        id: Some(kept.id),
                        name: "Kept".to_string(),
                        item_amounts: vec![amount(other_item.id, 6)],
                    },
                    UpdateGroupEntry {
                        id: None,
                        name: "Added".to_string(),
                        item_amounts: vec![amount(item.id, 1)],
                    },
                ]),
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.game_id, game.id);
    assert_eq!(updated.groups.len(), 2);
    assert_eq!(updated.groups[0].id, kept.id);
    assert_eq!(updated.groups[0].name, "Kept");
    assert_eq!(updated.groups[0].item_amounts, vec![amount(other_item.id, 6)]);
    assert_eq!(updated.groups[0].preferences.cost_reduction, 0.5);
    assert_eq!(updated.groups[1].name, "Added");
    assert_eq!(updated.groups[1].item_amounts, vec![amount(item.id, 1)]);

    assert!(entity::prelude::CollectionGroup::find_by_id(dropped.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(
        entity::prelude::GroupPreference::find()
            .filter(entity::group_preference::Column::GroupId.eq(dropped.id))
            .count(db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::GroupItemPreference::find()
            .filter(entity::group_item_preference::Column::GroupId.eq(dropped.id))
            .count(db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::GroupPreference::find()
            .filter(entity::group_preference::Column::GroupId.eq(kept.id))
            .count(db)
            .await?,
        2
    );

    Ok(())
}

/// Tests an update that omits the group list.
///
/// Expected: Ok with groups and amounts unchanged
#[tokio::test]
async fn omitted_groups_are_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, item, collection, group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    factory::create_item_amount(db, group.id, item.id, 3).await?;

    let updated = CollectionService::new(db)
        .update_collection(
            owner.id,
            collection.id,
            UpdateCollectionParam {
                name: "Renamed".to_string(),
                game_id: None,
                groups: None,
            },
        )
        .await?;

    assert_eq!(updated.groups.len(), 1);
    assert_eq!(updated.groups[0].item_amounts, vec![amount(item.id, 3)]);

    Ok(())
}

/// Tests an update naming a group of another collection.
///
/// Expected: Err(NotFound Group) and the collection keeps its name
#[tokio::test]
async fn foreign_group_id_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, _, collection, _) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let other_collection = factory::create_collection(db, owner.id, game.id).await?;
    let foreign = factory::create_group(db, other_collection.id).await?;

    let result = CollectionService::new(db)
        .update_collection(
            owner.id,
            collection.id,
            UpdateCollectionParam {
                name: "Renamed".to_string(),
                game_id: None,
                groups: Some(vec![UpdateGroupEntry {
                    id: Some(foreign.id),
                    name: "Stolen".to_string(),
                    item_amounts: Vec::new(),
                }]),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Group,
            ..
        })
    ));
    let stored = entity::prelude::Collection::find_by_id(collection.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, collection.name);

    Ok(())
}
