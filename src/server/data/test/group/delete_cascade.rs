use super::*;

/// Tests deleting a group with rows from several users.
///
/// Verifies that item amounts and the preference rows of every user are removed
/// together with the group, while a sibling group keeps all of its rows.
///
/// Expected: Ok(1) and no rows left for the deleted group
#[tokio::test]
async fn removes_amounts_and_every_users_preferences() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _game, item, collection, group) =
        factory::helpers::create_group_with_dependencies(db).await?;
    let viewer = factory::create_user(db).await?;
    let sibling = factory::create_group(db, collection.id).await?;

    factory::create_item_amount(db, group.id, item.id, 4).await?;
    factory::create_item_amount(db, sibling.id, item.id, 2).await?;
    for user_id in [owner.id, viewer.id] {
        factory::collection::create_group_preference(db, group.id, user_id, 0.5).await?;
        factory::collection::create_group_item_preference(db, group.id, user_id, item.id, None)
            .await?;
    }
    factory::collection::create_group_preference(db, sibling.id, viewer.id, 0.8).await?;

    let deleted = GroupRepository::new(db).delete_cascade(&[group.id]).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::CollectionGroup::find_by_id(group.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(
        entity::prelude::CollectionItemAmount::find()
            .filter(entity::collection_item_amount::Column::GroupId.eq(group.id))
            .count(db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::GroupPreference::find()
            .filter(entity::group_preference::Column::GroupId.eq(group.id))
            .count(db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::GroupItemPreference::find()
            .filter(entity::group_item_preference::Column::GroupId.eq(group.id))
            .count(db)
            .await?,
        0
    );

    assert_eq!(
        entity::prelude::CollectionItemAmount::find()
            .filter(entity::collection_item_amount::Column::GroupId.eq(sibling.id))
            .count(db)
            .await?,
        1
    );
    assert_eq!(
        entity::prelude::GroupPreference::find()
            .filter(entity::group_preference::Column::GroupId.eq(sibling.id))
            .count(db)
            .await?,
        1
    );

    Ok(())
}

/// Tests deleting an empty id list.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_list_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_collection_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, group) = factory::helpers::create_group_with_dependencies(db).await?;

    let deleted = GroupRepository::new(db).delete_cascade(&[]).await?;

    assert_eq!(deleted, 0);
    assert!(entity::prelude::CollectionGroup::find_by_id(group.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
