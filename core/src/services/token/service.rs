//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::favorite::UserId;
use crate::domain::entities::token::{AccessToken, Claims};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_minutes * 60
    }

    /// Generates a signed access token for a user
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - The encoded token with its expiry
    /// * `Err(DomainError)` - Signing failed
    pub fn generate_access_token(&self, user_id: UserId) -> DomainResult<AccessToken> {
        let claims = Claims::new_access_token(
            user_id,
            &self.config.issuer,
            &self.config.audience,
            Duration::minutes(self.config.access_token_expiry_minutes),
        );
        let token = self.encode_jwt(&claims)?;
        let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0).ok_or(
            DomainError::Token(TokenError::TokenGenerationFailed),
        )?;

        Ok(AccessToken {
            token,
            user_id,
            expires_at,
        })
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT access token to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                ErrorKind::ImmatureSignature
                | ErrorKind::InvalidIssuer
                | ErrorKind::InvalidAudience => DomainError::Token(TokenError::InvalidClaims),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        // A subject that is not a user id is as useless as a bad signature
        token_data
            .claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;

        Ok(token_data.claims)
    }
}
