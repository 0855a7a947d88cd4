use super::*;

/// Tests that only unknown ids are reported, sorted and without duplicates.
///
/// Expected: Ok with the unknown ids ascending
#[tokio::test]
async fn reports_unknown_ids_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let item = factory::create_item(db, game.id).await?;

    let missing = ItemRepository::new(db)
        .find_missing(&[9002, item.id, 9001, 9002])
        .await?;

    assert_eq!(missing, vec![9001, 9002]);

    Ok(())
}

/// Tests an empty id list.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn empty_input_reports_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ItemRepository::new(db).find_missing(&[]).await?.is_empty());

    Ok(())
}
