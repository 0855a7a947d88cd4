use super::*;

/// Tests that stored preferences are visible only to the viewer who stored them.
///
/// Expected: Ok; the storing viewer reads back the exact values, another viewer
/// reads the defaults and an empty recipe map
#[tokio::test]
async fn preferences_are_per_viewer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, item, collection, group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let recipe = factory::create_recipe(db, game.id).await?;

    let service = CollectionService::new(db);
    service
        .update_group_preferences(
            owner.id,
            collection.id,
            group.id,
            UpdateGroupPreferencesParam {
                preferences: GroupPreferences {
                    show_base_ingredients: true,
                    collapse_ingredients: false,
                    cost_reduction: 0.8,
                },
                item_recipe_preferences: BTreeMap::from([(item.id, Some(recipe.id))]),
            },
        )
        .await?;

    let as_owner = service.get_group(owner.id, group.id).await?;
    assert!(as_owner.preferences.show_base_ingredients);
    assert!(!as_owner.preferences.collapse_ingredients);
    assert_eq!(as_owner.preferences.cost_reduction, 0.8);
    assert_eq!(
        as_owner.item_recipe_preferences,
        BTreeMap::from([(item.id, Some(recipe.id))])
    );

    let as_other = service.get_group(other.id, group.id).await?;
    assert_eq!(as_other.preferences, GroupPreferences::default());
    assert!(as_other.item_recipe_preferences.is_empty());

    Ok(())
}

/// Tests that a second write replaces the recipe map instead of merging it.
///
/// Expected: Ok with only the second write's entries, including an explicit null
#[tokio::test]
async fn recipe_map_is_replaced() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, first_item, collection, group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let second_item = factory::create_item(db, game.id).await?;
    let recipe = factory::create_recipe(db, game.id).await?;

    let service = CollectionService::new(db);
    service
        .update_group_preferences(
            owner.id,
            collection.id,
            group.id,
            UpdateGroupPreferencesParam {
                preferences: GroupPreferences::default(),
                item_recipe_preferences: BTreeMap::from([
                    (first_item.id, Some(recipe.id)),
                    (second_item.id, Some(recipe.id)),
                ]),
            },
        )
        .await?;
    let group = service
        .update_group_preferences(
            owner.id,
            collection.id,
            group.id,
            UpdateGroupPreferencesParam {
                preferences: GroupPreferences::default(),
                item_recipe_preferences: BTreeMap::from([(second_item.id, None)]),
            },
        )
        .await?;

    assert_eq!(
        group.item_recipe_preferences,
        BTreeMap::from([(second_item.id, None)])
    );

    Ok(())
}

/// Tests a preference update naming a group of another collection.
///
/// Expected: Err(NotFound Group) and no preference row written
#[tokio::test]
async fn group_outside_collection_is_rejected() -> Result<(), AppError> {
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
        .update_group_preferences(
            owner.id,
            collection.id,
            foreign.id,
            UpdateGroupPreferencesParam {
                preferences: GroupPreferences::default(),
                item_recipe_preferences: BTreeMap::new(),
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
    assert_eq!(entity::prelude::GroupPreference::find().count(db).await?, 0);

    Ok(())
}

/// Tests a recipe map pointing at an unknown recipe.
///
/// Expected: Err(NotFound Recipe) and the display settings are not written either
#[tokio::test]
async fn unknown_recipe_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, item, collection, group) =
        factory::helpers::create_group_with_dependencies(db).await?;

    let result = CollectionService::new(db)
        .update_group_preferences(
            owner.id,
            collection.id,
            group.id,
            UpdateGroupPreferencesParam {
                preferences: GroupPreferences {
                    cost_reduction: 0.1,
                    ..GroupPreferences::default()
                },
                item_recipe_preferences: BTreeMap::from([(item.id, Some(31337))]),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Recipe,
            id: 31337
        })
    ));
    assert_eq!(entity::prelude::GroupPreference::find().count(db).await?, 0);

    Ok(())
}
