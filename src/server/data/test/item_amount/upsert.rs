use super::*;

/// Tests inserting a new item amount.
///
/// Expected: Ok with one row holding the amount
#[tokio::test]
async fn inserts_new_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, item, _, group) = factory::helpers::create_group_with_dependencies(db).await?;

    let repo = ItemAmountRepository::new(db);
    repo.upsert(group.id, item.id, 3).await?;

    let rows = repo.get_by_groups(&[group.id]).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].item_id, item.id);
    assert_eq!(rows[0].amount, 3);

    Ok(())
}

/// Tests that writing the same item twice overwrites instead of duplicating.
///
/// Expected: Ok with a single row holding the last amount
#[tokio::test]
async fn overwrites_existing_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, item, _, group) = factory::helpers::create_group_with_dependencies(db).await?;

    let repo = ItemAmountRepository::new(db);
    repo.upsert(group.id, item.id, 3).await?;
    repo.upsert(group.id, item.id, 3).await?;
    repo.upsert(group.id, item.id, 12).await?;

    let rows = repo.get_by_groups(&[group.id]).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, 12);

    Ok(())
}
