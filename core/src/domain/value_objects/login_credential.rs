//! Login credential value object

use std::fmt;

use validator::ValidateEmail;

use crate::errors::ValidationError;

/// Email and password that passed boundary validation.
///
/// The only way to build one is [`LoginCredential::parse`], so holding a
/// `LoginCredential` means: email is non-blank and syntactically valid,
/// password is non-blank. Values are kept exactly as submitted (no trimming,
/// no lowercasing).
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredential {
    email: String,
    password: String,
}

impl LoginCredential {
    /// Validate a login submission.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// blank email, malformed email, blank password.
    pub fn parse(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        let password = password.into();

        if email.trim().is_empty() {
            return Err(ValidationError::required("email"));
        }
        if !email.validate_email() {
            return Err(ValidationError::InvalidEmail);
        }
        if password.trim().is_empty() {
            return Err(ValidationError::required("password"));
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredential")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
