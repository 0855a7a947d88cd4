use super::*;

/// Tests exchanging a refresh token.
///
/// Expected: Ok with a new pair for the refresh token, Err(WrongTokenType) for the
/// access token
#[tokio::test]
async fn accepts_only_refresh_tokens() -> Result<(), AppError> {
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

    let refreshed = service.refresh(&tokens.refresh_token).await?;
    let claims = jwt::validate_token(&refreshed.access_token, &jwt_config)?;
    assert_eq!(claims.user_name, "crafter");

    assert!(matches!(
        service.refresh(&tokens.access_token).await,
        Err(AppError::AuthErr(AuthError::WrongTokenType(_)))
    ));

    Ok(())
}

/// Tests refreshing with a token signed by another secret.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (jwt_config, admin_config) = (jwt_config(), admin_config());

    let user = factory::create_user(db).await?;
    let foreign_config = JwtConfig {
        secret: "another-secret".to_string(),
        ..jwt_config.clone()
    };
    let tokens = jwt::generate_tokens(user.id, &user.user_name, &foreign_config)?;

    let result = UserService::new(db, &jwt_config, &admin_config)
        .refresh(&tokens.refresh_token)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
