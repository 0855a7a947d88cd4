use super::*;

/// Tests finding a user by name.
///
/// Expected: Ok(Some) for the stored name, Ok(None) for an unknown name
#[tokio::test]
async fn finds_existing_user_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .user_name("smith")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_user_name("smith").await?;
    let missing = repo.find_by_user_name("nobody").await?;

    assert_eq!(found.map(|u| u.id), Some(stored.id));
    assert!(missing.is_none());

    Ok(())
}

/// Tests that an unknown stored role is read as unverified.
#[tokio::test]
async fn unknown_role_reads_as_unverified() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .role("Moderator")
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_id(stored.id).await?.unwrap();

    assert_eq!(user.role, Role::Unverified);

    Ok(())
}
