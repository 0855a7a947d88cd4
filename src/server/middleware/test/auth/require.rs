use super::*;

/// Tests that any verified user passes an empty role list.
///
/// Expected: Ok with the authenticated user
#[tokio::test]
async fn admits_verified_user_without_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();

    let user = factory::user::create_user(db).await?;
    let token = access_token(&user, &config);

    let authenticated = AuthGuard::new(db, &config, &token).require(&[]).await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.role, Role::User);

    Ok(())
}

/// Tests that a role outside the allowed list is denied.
///
/// Expected: Err(AccessDenied) for a User on an Admin/Contributor endpoint
#[tokio::test]
async fn denies_role_not_in_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();

    let user = factory::user::create_user(db).await?;
    let token = access_token(&user, &config);

    let result = AuthGuard::new(db, &config, &token)
        .require(&[Role::Admin, Role::Contributor])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests that a contributor passes a list containing its role.
#[tokio::test]
async fn admits_listed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();

    let user = factory::user::UserFactory::new(db)
        .role("Contributor")
        .build()
        .await?;
    let token = access_token(&user, &config);

    let authenticated = AuthGuard::new(db, &config, &token)
        .require(&[Role::Admin, Role::Contributor])
        .await?;

    assert_eq!(authenticated.role, Role::Contributor);

    Ok(())
}

/// Tests that unverified users are rejected by `require` but admitted by
/// `require_any_status`.
#[tokio::test]
async fn unverified_user_only_passes_any_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();

    let user = factory::user::UserFactory::new(db)
        .role("Unverified")
        .build()
        .await?;
    let token = access_token(&user, &config);
    let guard = AuthGuard::new(db, &config, &token);

    let result = guard.require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unverified(_)))
    ));

    let authenticated = guard.require_any_status().await?;
    assert_eq!(authenticated.role, Role::Unverified);

    Ok(())
}

/// Tests that a refresh token cannot authenticate a request.
///
/// Expected: Err(WrongTokenType)
#[tokio::test]
async fn rejects_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();

    let user = factory::user::create_admin(db).await?;
    let token = BearerToken(
        jwt::generate_token(user.id, &user.user_name, TokenType::RefreshToken, &config).unwrap(),
    );

    let result = AuthGuard::new(db, &config, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::WrongTokenType(_)))
    ));

    Ok(())
}

/// Tests that a token issued under another user name is rejected.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_token_with_stale_user_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();

    let user = factory::user::create_user(db).await?;
    let token = BearerToken(
        jwt::generate_token(user.id, "renamed", TokenType::AccessToken, &config).unwrap(),
    );

    let result = AuthGuard::new(db, &config, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}

/// Tests that a malformed token is rejected.
#[tokio::test]
async fn rejects_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = jwt_config();

    let token = BearerToken("not-a-jwt".to_string());

    let result = AuthGuard::new(db, &config, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
