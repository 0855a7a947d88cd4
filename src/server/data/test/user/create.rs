use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the stored role converted back into `Role`
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            user_name: "crafter".to_string(),
            email: "crafter@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Unverified,
        })
        .await?;

    assert_eq!(user.user_name, "crafter");
    assert_eq!(user.role, Role::Unverified);

    Ok(())
}

/// Tests that a second user with the same user name is rejected.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("crafter")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            user_name: "crafter".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
