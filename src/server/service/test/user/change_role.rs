use super::*;

/// Tests promoting a user to contributor.
///
/// Expected: Ok with the new role
#[tokio::test]
async fn changes_role_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (jwt_config, admin_config) = (jwt_config(), admin_config());

    let user = factory::user::UserFactory::new(db)
        .role("Unverified")
        .build()
        .await?;

    let updated = UserService::new(db, &jwt_config, &admin_config)
        .change_role(user.id, "Contributor")
        .await?;

    assert_eq!(updated.role, Role::Contributor);

    Ok(())
}

/// Tests that unknown role names and the super admin are rejected.
///
/// Expected: Err(BadRequest) in both cases
#[tokio::test]
async fn rejects_unknown_role_and_super_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (jwt_config, admin_config) = (jwt_config(), admin_config());

    let service = UserService::new(db, &jwt_config, &admin_config);
    assert!(service.ensure_super_admin().await?);
    assert!(!service.ensure_super_admin().await?);

    let user = factory::create_user(db).await?;
    let root = service
        .get_users()
        .await?
        .into_iter()
        .find(|u| u.user_name == "root")
        .unwrap();

    assert_eq!(root.role, Role::Admin);
    assert!(matches!(
        service.change_role(user.id, "Overlord").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.change_role(root.id, "User").await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
