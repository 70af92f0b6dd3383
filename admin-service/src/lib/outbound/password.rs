use auth::PasswordError;
use auth::PasswordHasher;

use crate::domain::session::ports::PasswordVerifier;

/// Argon2id adapter for the password verification port.
pub struct Argon2Verifier {
    hasher: PasswordHasher,
}

impl Argon2Verifier {
    pub fn new() -> Self {
        Self {
            hasher: PasswordHasher::new(),
        }
    }
}

impl Default for Argon2Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordVerifier for Argon2Verifier {
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, PasswordError> {
        self.hasher.verify(password, password_hash)
    }
}
