use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing and verification (Argon2id).
///
/// Hashes are produced and consumed in PHC string format, so the salt and
/// cost parameters travel inside the stored hash itself.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// Uses Argon2id with a freshly generated random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a candidate password against a stored PHC-format hash.
    ///
    /// Recomputes the digest with the salt and parameters embedded in the
    /// stored hash; the digest comparison inside the `argon2` crate is
    /// constant-time.
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash is not a valid PHC string. Callers
    ///   that validate the hash at startup never hit this at request time.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a stored hash parses as a PHC string.
///
/// Intended for startup validation: a hash that fails here is a
/// configuration error, not a runtime condition.
///
/// # Errors
/// * `MalformedHash` - Input is not a valid PHC string
pub fn validate_hash_format(hash: &str) -> Result<(), PasswordError> {
    PasswordHash::new(hash)
        .map(|_| ())
        .map_err(|e| PasswordError::MalformedHash(e.to_string()))
}
