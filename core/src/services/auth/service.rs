//! Main authentication service implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::token::AccessToken;
use crate::domain::value_objects::LoginCredential;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Authentication service for the email and password login flow
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user lookups
    /// * `token_service` - Service that signs access tokens
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticate a user and issue an access token
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - Credentials matched an active account
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// * `Err(AuthError::AccountDisabled)` - Password matched a disabled account
    pub async fn login(&self, credential: &LoginCredential) -> DomainResult<AccessToken> {
        let user = match self.user_repository.find_by_email(credential.email()).await? {
            Some(user) => user,
            None => {
                info!("login rejected: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let matches = bcrypt::verify(credential.password(), &user.password_hash).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to verify password hash: {}", e),
            }
        })?;

        if !matches {
            info!(user_id = user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            warn!(user_id = user.id, "login rejected: account disabled");
            return Err(AuthError::AccountDisabled.into());
        }

        let token = self.token_service.generate_access_token(user.id)?;
        info!(user_id = user.id, "user logged in");
        Ok(token)
    }
}
