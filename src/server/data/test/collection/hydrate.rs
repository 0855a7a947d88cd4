use super::*;

/// Tests hydrating collections for a viewer.
///
/// Verifies that each collection receives only its own groups in creation order and
/// that a collection without groups hydrates with an empty group list.
///
/// Expected: Ok with groups attached to the right collections
#[tokio::test]
async fn attaches_groups_to_their_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let first = factory::create_collection(db, owner.id, game.id).await?;
    let second = factory::create_collection(db, owner.id, game.id).await?;
    let empty = factory::create_collection(db, owner.id, game.id).await?;

    let a = factory::create_group(db, first.id).await?;
    let b = factory::create_group(db, second.id).await?;
    let c = factory::create_group(db, first.id).await?;

    let repo = CollectionRepository::new(db);
    let hydrated = repo
        .hydrate(vec![first.clone(), second.clone(), empty.clone()], owner.id)
        .await?;

    assert_eq!(hydrated.len(), 3);
    assert_eq!(
        hydrated[0].groups.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![a.id, c.id]
    );
    assert_eq!(
        hydrated[1].groups.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![b.id]
    );
    assert!(hydrated[2].groups.is_empty());

    Ok(())
}
