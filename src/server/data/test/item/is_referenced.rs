use super::*;

/// Tests an item used as a recipe input.
///
/// Expected: Ok(true)
#[tokio::test]
async fn recipe_input_references_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let ore = factory::create_item(db, game.id).await?;
    let ingot = factory::create_item(db, game.id).await?;
    factory::recipe::RecipeFactory::new(db, game.id)
        .input(ore.id, 2)
        .output(ingot.id, 1)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    assert!(repo.is_referenced(ore.id).await?);
    assert!(repo.is_referenced(ingot.id).await?);

    Ok(())
}

/// Tests an item only present in a collection group.
///
/// Expected: Ok(true), and Ok(false) for an unused item
#[tokio::test]
async fn group_amount_references_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game, item, _, group) = factory::helpers::create_group_with_dependencies(db).await?;
    let unused = factory::create_item(db, game.id).await?;
    factory::create_item_amount(db, group.id, item.id, 1).await?;

    let repo = ItemRepository::new(db);
    assert!(repo.is_referenced(item.id).await?);
    assert!(!repo.is_referenced(unused.id).await?);

    Ok(())
}
