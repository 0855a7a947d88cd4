use super::*;

/// Tests replacing an item's categories with an overlapping list.
///
/// Expected: Ok with exactly the new categories linked, duplicates collapsed
#[tokio::test]
async fn replaces_previous_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ores = factory::create_item_category(db).await?;
    let metal = factory::create_item_category(db).await?;
    let tools = factory::create_item_category(db).await?;
    let game = factory::create_game(db).await?;
    let item = factory::item::ItemFactory::new(db, game.id)
        .category(ores.id)
        .category(metal.id)
        .build()
        .await?;

    let repo = ItemCategoryRepository::new(db);
    repo.replace_item_categories(item.id, &[tools.id, metal.id, tools.id])
        .await?;

    let linked = repo.get_by_items(&[item.id]).await?;
    let ids: Vec<i32> = linked[&item.id].iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![metal.id, tools.id]);

    Ok(())
}

/// Tests clearing the categories of an item.
///
/// Expected: Ok with no entry for the item
#[tokio::test]
async fn empty_list_removes_all_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ores = factory::create_item_category(db).await?;
    let game = factory::create_game(db).await?;
    let item = factory::item::ItemFactory::new(db, game.id)
        .category(ores.id)
        .build()
        .await?;

    let repo = ItemCategoryRepository::new(db);
    repo.replace_item_categories(item.id, &[]).await?;

    assert!(repo.get_by_items(&[item.id]).await?.is_empty());

    Ok(())
}
