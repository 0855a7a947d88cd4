use super::*;

/// Tests listing items filtered by game.
///
/// Expected: Ok with only the requested game's items, or all items without a filter
#[tokio::test]
async fn filters_by_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;

    let repo = ItemRepository::new(db);
    let iron = repo.create(ItemParam::new(game.id, "Iron")).await?;
    repo.create(ItemParam::new(other_game.id, "Wood")).await?;

    let filtered = repo.get_all(Some(game.id)).await?;
    let all = repo.get_all(None).await?;

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, iron.id);
    assert_eq!(filtered[0].name, "Iron");
    assert_eq!(all.len(), 2);

    Ok(())
}
