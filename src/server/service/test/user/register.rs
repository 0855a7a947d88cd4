use super::*;

/// Tests registering a new account.
///
/// Verifies that the account is stored unverified and that the returned access
/// token names the new user.
///
/// Expected: Ok with tokens for an Unverified user
#[tokio::test]
async fn registers_unverified_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (jwt_config, admin_config) = (jwt_config(), admin_config());

    let service = UserService::new(db, &jwt_config, &admin_config);
    let tokens = service
        .register(
            "crafter".to_string(),
            "crafter@example.com".to_string(),
            "long-enough",
        )
        .await?;

    let claims = jwt::validate_token(&tokens.access_token, &jwt_config)?;
    let user = service.get_user(claims.sub).await?;

    assert_eq!(claims.user_name, "crafter");
    assert_eq!(user.role, Role::Unverified);
    assert_ne!(user.password_hash, "long-enough");

    Ok(())
}

/// Tests registering with a taken user name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_taken_user_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (jwt_config, admin_config) = (jwt_config(), admin_config());

    factory::user::UserFactory::new(db)
        .user_name("crafter")
        .build()
        .await?;

    let result = UserService::new(db, &jwt_config, &admin_config)
        .register(
            "crafter".to_string(),
            "new@example.com".to_string(),
            "long-enough",
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering with a password below the minimum length.
///
/// Expected: Err(BadRequest) and no user stored
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (jwt_config, admin_config) = (jwt_config(), admin_config());

    let service = UserService::new(db, &jwt_config, &admin_config);
    let result = service
        .register("crafter".to_string(), "c@example.com".to_string(), "short")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_users().await?.is_empty());

    Ok(())
}
