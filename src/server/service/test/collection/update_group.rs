use super::*;

/// Tests renaming a group that has amounts and viewer preferences.
///
/// Expected: Ok with the new name while amounts and the viewer's preferences stay
#[tokio::test]
async fn renames_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, item, collection, group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    factory::create_item_amount(db, group.id, item.id, 3).await?;

    let service = CollectionService::new(db);
    let preferences = GroupPreferences {
        show_base_ingredients: true,
        collapse_ingredients: true,
        cost_reduction: 0.5,
    };
    service
        .update_group_preferences(
            owner.id,
            collection.id,
            group.id,
            UpdateGroupPreferencesParam {
                preferences,
                item_recipe_preferences: BTreeMap::new(),
            },
        )
        .await?;

    let renamed = service
        .update_group(owner.id, group.id, "Forge".to_string())
        .await?;

    assert_eq!(renamed.id, group.id);
    assert_eq!(renamed.name, "Forge");
    assert_eq!(renamed.item_amounts, vec![amount(item.id, 3)]);
    assert_eq!(renamed.preferences, preferences);
    assert_eq!(service.get_group(owner.id, group.id).await?, renamed);

    Ok(())
}

/// Tests renaming a group that does not exist.
///
/// Expected: Err(NotFound Group)
#[tokio::test]
async fn missing_group_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let result = CollectionService::new(db)
        .update_group(owner.id, 55, "Ghost".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound {
            kind: EntityKind::Group,
            id: 55
        })
    ));

    Ok(())
}
