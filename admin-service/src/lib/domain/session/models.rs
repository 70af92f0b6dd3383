use auth::validate_hash_format;
use auth::Claims;
use auth::Subject;

use crate::domain::session::errors::CredentialsError;
use crate::domain::session::errors::IdentityError;

/// The single recognized administrative identity.
///
/// Constructed once at startup from configuration and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    username: String,
    password_hash: String,
}

impl AdminIdentity {
    /// Build the identity, validating the stored hash format.
    ///
    /// # Errors
    /// * `EmptyUsername` - Configured username is empty
    /// * `MalformedPasswordHash` - Stored hash is not a valid PHC string.
    ///   Treated as fatal by the caller; the process refuses to boot.
    pub fn new(username: String, password_hash: String) -> Result<Self, IdentityError> {
        if username.is_empty() {
            return Err(IdentityError::EmptyUsername);
        }

        validate_hash_format(&password_hash)
            .map_err(|e| IdentityError::MalformedPasswordHash(e.to_string()))?;

        Ok(Self {
            username,
            password_hash,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Validated login credentials.
///
/// Created per request and dropped right after verification. Deliberately
/// carries no `Debug` implementation so the plaintext password cannot end
/// up in logs.
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub const MIN_PASSWORD_LENGTH: usize = 6;

    /// Validate the submitted fields.
    ///
    /// # Errors
    /// * `EmptyUsername` - Username is empty
    /// * `PasswordTooShort` - Password is shorter than 6 characters
    pub fn new(username: String, password: String) -> Result<Self, CredentialsError> {
        if username.is_empty() {
            return Err(CredentialsError::EmptyUsername);
        }

        if password.len() < Self::MIN_PASSWORD_LENGTH {
            return Err(CredentialsError::PasswordTooShort {
                min: Self::MIN_PASSWORD_LENGTH,
            });
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Result of a successful login.
pub struct IssuedToken {
    /// Signed session token
    pub access_token: String,
}

/// Per-request identity reconstructed from a validated token.
///
/// `user_id` keeps the subject claim's original JSON type (string or
/// number); normalizing it would change the contract for downstream
/// consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Subject,
    pub username: String,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
        }
    }
}
