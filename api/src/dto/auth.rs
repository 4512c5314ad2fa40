use serde::{Deserialize, Serialize};

use estate_core::domain::entities::token::AccessToken;

/// Body of `POST /api/v1/auth/login`.
///
/// Missing fields deserialize as empty strings so that
/// `LoginCredential::parse` reports them as required fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: i64,
}

impl From<AccessToken> for LoginResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            expires_in: token.expires_in(),
            access_token: token.token,
            token_type: "Bearer".to_string(),
            user_id: token.user_id,
        }
    }
}
