//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use actix_web::web;
use std::sync::Arc;

use estate_api::AppState;
use estate_core::domain::entities::user::User;
use estate_core::repositories::{MockFavoriteRepository, MockUserRepository};
use estate_core::services::token::{TokenService, TokenServiceConfig};

pub const PASSWORD: &str = "hunter2-but-longer";
pub const MAX_PAYLOAD: usize = 64 * 1024;

pub type TestState = AppState<MockFavoriteRepository, MockUserRepository>;

pub struct TestContext {
    pub favorites: Arc<MockFavoriteRepository>,
    pub users: Arc<MockUserRepository>,
    pub tokens: Arc<TokenService>,
    pub state: web::Data<TestState>,
}

impl TestContext {
    pub fn new() -> Self {
        let favorites = Arc::new(MockFavoriteRepository::new());
        let users = Arc::new(MockUserRepository::new());
        let tokens = Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: "integration-test-secret".to_string(),
            ..TokenServiceConfig::default()
        }));
        let state = web::Data::new(AppState::new(
            Arc::clone(&favorites),
            Arc::clone(&users),
            Arc::clone(&tokens),
        ));

        Self {
            favorites,
            users,
            tokens,
            state,
        }
    }

    /// Store an account whose password is [`PASSWORD`]
    pub async fn add_user(&self, id: i64, email: &str, active: bool) {
        let hash = bcrypt::hash(PASSWORD, 4).unwrap();
        let mut user = User::new(id, email, hash);
        if !active {
            user.deactivate();
        }
        self.users.insert(user).await;
    }

    /// `Authorization` header value for the given user
    pub fn bearer(&self, user_id: i64) -> String {
        let token = self.tokens.generate_access_token(user_id).unwrap();
        format!("Bearer {}", token.token)
    }
}
