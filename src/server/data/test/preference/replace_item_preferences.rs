use super::*;

/// Tests that new choices replace the stored ones instead of merging.
///
/// The first write chooses a recipe for two items. The second write only lists one
/// of them, with an explicit null. The other item must lose its choice.
///
/// Expected: Ok with exactly the second write's entries
#[tokio::test]
async fn replaces_instead_of_merging() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, first_item, _, group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let second_item = factory::create_item(db, game.id).await?;
    let recipe = factory::create_recipe(db, game.id).await?;

    let repo = PreferenceRepository::new(db);
    repo.replace_item_preferences(
        group.id,
        owner.id,
        &BTreeMap::from([
            (first_item.id, Some(recipe.id)),
            (second_item.id, Some(recipe.id)),
        ]),
    )
    .await?;
    repo.replace_item_preferences(
        group.id,
        owner.id,
        &BTreeMap::from([(first_item.id, None)]),
    )
    .await?;

    let rows = repo.get_item_preferences(&[group.id], owner.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].item_id, first_item.id);
    assert_eq!(rows[0].recipe_id, None);

    Ok(())
}

/// Tests that replacing one user's choices leaves another user's untouched.
///
/// Expected: Ok with the other user's row still present
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, game, item, _, group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let viewer = factory::create_user(db).await?;
    let recipe = factory::create_recipe(db, game.id).await?;

    factory::collection::create_group_item_preference(
        db,
        group.id,
        viewer.id,
        item.id,
        Some(recipe.id),
    )
    .await?;

    let repo = PreferenceRepository::new(db);
    repo.replace_item_preferences(group.id, owner.id, &BTreeMap::new())
        .await?;

    let viewer_rows = repo.get_item_preferences(&[group.id], viewer.id).await?;
    assert_eq!(viewer_rows.len(), 1);
    assert_eq!(viewer_rows[0].recipe_id, Some(recipe.id));

    Ok(())
}
