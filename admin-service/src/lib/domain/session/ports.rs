use auth::PasswordError;

/// Port for password verification against a stored hash.
///
/// Abstracted so credential-validation behavior (in particular, that
/// unknown usernames never reach the verifier) is observable in tests.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordVerifier: Send + Sync + 'static {
    /// Verify a candidate password against a stored PHC-format hash.
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash is not a valid PHC string
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, PasswordError>;
}
