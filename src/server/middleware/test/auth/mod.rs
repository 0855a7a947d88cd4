use crate::server::{
    auth::jwt::{self, TokenType},
    config::JwtConfig,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, BearerToken},
    model::user::Role,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "middleware-test-secret".to_string(),
        issuer: "game-tools".to_string(),
        audience: "game-tools-users".to_string(),
        access_token_expiry_mins: 5,
        refresh_token_expiry_days: 180,
    }
}

fn access_token(user: &entity::user::Model, config: &JwtConfig) -> BearerToken {
    BearerToken(
        jwt::generate_token(user.id, &user.user_name, TokenType::AccessToken, config).unwrap(),
    )
}
