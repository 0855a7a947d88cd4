use super::*;

/// Tests reading a collection that does not exist.
///
/// Expected: Err(NotFound Collection)
#[tokio::test]
async fn missing_collection_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::create_user(db).await?;

    let result = CollectionService::new(db)
        .get_collection(viewer.id, 321)
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Collection,
            id: 321
        })
    ));

    Ok(())
}

/// Tests reading the same collection as its owner and as another viewer.
///
/// Expected: Ok with identical shared data; each viewer sees only their own
/// preferences and recipe choices
#[tokio::test]
async fn overlays_viewer_preferences() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, item, collection, group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    factory::create_item_amount(db, group.id, item.id, 6).await?;
    let viewer = factory::create_user(db).await?;
    let recipe = factory::create_recipe(db, game.id).await?;

    let service = CollectionService::new(db);
    let viewer_preferences = GroupPreferences {
        show_base_ingredients: false,
        collapse_ingredients: true,
        cost_reduction: 0.25,
    };
    service
        .update_group_preferences(
            viewer.id,
            collection.id,
            group.id,
            UpdateGroupPreferencesParam {
                preferences: viewer_preferences,
                item_recipe_preferences: BTreeMap::from([(item.id, Some(recipe.id))]),
            },
        )
        .await?;

    let as_owner = service.get_collection(owner.id, collection.id).await?;
    let as_viewer = service.get_collection(viewer.id, collection.id).await?;

    assert_eq!(as_owner.id, as_viewer.id);
    assert_eq!(as_owner.name, as_viewer.name);
    assert_eq!(as_owner.user_id, owner.id);
    assert_eq!(
        as_owner.groups[0].item_amounts,
        as_viewer.groups[0].item_amounts
    );
    assert_eq!(as_owner.groups[0].item_amounts, vec![amount(item.id, 6)]);

    assert_eq!(as_owner.groups[0].preferences, GroupPreferences::default());
    assert!(as_owner.groups[0].item_recipe_preferences.is_empty());
    assert_eq!(as_viewer.groups[0].preferences, viewer_preferences);
    assert_eq!(
        as_viewer.groups[0].item_recipe_preferences,
        BTreeMap::from([(item.id, Some(recipe.id))])
    );

    Ok(())
}
