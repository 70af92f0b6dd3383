use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Login request field validation errors.
///
/// Reported as client input errors, distinct from authentication failures.
#[derive(Debug, Clone, Error)]
pub enum CredentialsError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Administrator identity construction errors.
///
/// These are configuration errors and abort startup.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error("admin username must not be empty")]
    EmptyUsername,

    #[error("admin password hash is malformed: {0}")]
    MalformedPasswordHash(String),
}

/// Session operation errors.
///
/// The HTTP boundary collapses the authentication variants into uniform
/// unauthorized responses; the distinctions only exist for internal logging.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    TokenInvalid(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token generation error: {0}")]
    Jwt(JwtError),
}
