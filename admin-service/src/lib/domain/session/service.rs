use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use auth::PasswordError;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::AdminIdentity;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::IssuedToken;
use crate::domain::session::models::Principal;
use crate::domain::session::ports::PasswordVerifier;

/// Session coordinator: credential validation, token issuance, and token
/// authorization against the single administrator identity.
pub struct SessionService<V: PasswordVerifier> {
    identity: AdminIdentity,
    verifier: V,
    jwt_handler: JwtHandler,
    token_ttl_hours: i64,
}

impl<V: PasswordVerifier> SessionService<V> {
    /// Create a new session service.
    ///
    /// # Arguments
    /// * `identity` - The administrator identity (validated at startup)
    /// * `verifier` - Password verifier implementation
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl_hours` - Token (and cookie) lifetime in hours
    pub fn new(identity: AdminIdentity, verifier: V, jwt_secret: &[u8], token_ttl_hours: i64) -> Self {
        Self {
            identity,
            verifier,
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl_hours,
        }
    }

    /// Check submitted credentials against the stored identity.
    ///
    /// A username mismatch returns `false` without touching the hash, so
    /// response timing distinguishes known from unknown usernames. Accepted
    /// tradeoff: it avoids spending Argon2 work on arbitrary usernames, and
    /// the uniform error message at the boundary still hides which field
    /// was wrong.
    ///
    /// # Errors
    /// * `PasswordError` - Verifier failed (malformed stored hash)
    pub fn validate_credentials(&self, credentials: &Credentials) -> Result<bool, PasswordError> {
        if credentials.username() != self.identity.username() {
            return Ok(false);
        }

        self.verifier
            .verify(credentials.password(), self.identity.password_hash())
    }

    /// Verify credentials and issue a signed session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Username or password does not match
    /// * `Password` - Password verification failed
    /// * `Jwt` - Token generation failed
    pub fn login(&self, credentials: &Credentials) -> Result<IssuedToken, SessionError> {
        if !self.validate_credentials(credentials)? {
            return Err(SessionError::InvalidCredentials);
        }

        let claims = Claims::for_admin(self.identity.username(), self.token_ttl_hours);
        let access_token = self
            .jwt_handler
            .encode(&claims)
            .map_err(SessionError::Jwt)?;

        Ok(IssuedToken { access_token })
    }

    /// Validate a session token and reconstruct the principal.
    ///
    /// Extracts exactly the subject (type-preserving) and username claims;
    /// anything else the token carries is dropped.
    ///
    /// # Errors
    /// * `TokenExpired` - Token expiration is in the past
    /// * `TokenInvalid` - Signature invalid, tampered, or malformed
    pub fn authorize(&self, token: &str) -> Result<Principal, SessionError> {
        let claims: Claims = self.jwt_handler.decode(token).map_err(|e| match e {
            JwtError::TokenExpired => SessionError::TokenExpired,
            other => SessionError::TokenInvalid(other.to_string()),
        })?;

        Ok(Principal::from(claims))
    }
}

#[cfg(test)]
mod tests {
    use auth::Subject;

    use super::*;
    use crate::domain::session::ports::MockPasswordVerifier;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn identity() -> AdminIdentity {
        let hash = auth::PasswordHasher::new()
            .hash("password")
            .expect("Failed to hash password");
        AdminIdentity::new("admin".to_string(), hash).expect("Identity rejected")
    }

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials::new(username.to_string(), password.to_string())
            .expect("Credentials rejected")
    }

    #[test]
    fn test_unknown_username_skips_verifier() {
        let mut verifier = MockPasswordVerifier::new();
        verifier.expect_verify().times(0);

        let service = SessionService::new(identity(), verifier, SECRET, 24);

        let valid = service
            .validate_credentials(&credentials("somebody", "password"))
            .expect("Validation failed");
        assert!(!valid);

        let result = service.login(&credentials("somebody", "password"));
        assert!(matches!(result, Err(SessionError::InvalidCredentials)));
    }

    #[test]
    fn test_wrong_password_reaches_verifier_once() {
        let mut verifier = MockPasswordVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = SessionService::new(identity(), verifier, SECRET, 24);

        let result = service.login(&credentials("admin", "password123"));
        assert!(matches!(result, Err(SessionError::InvalidCredentials)));
    }

    #[test]
    fn test_login_success_issues_valid_token() {
        let mut verifier = MockPasswordVerifier::new();
        verifier.expect_verify().times(1).returning(|_, _| Ok(true));

        let service = SessionService::new(identity(), verifier, SECRET, 24);

        let issued = service
            .login(&credentials("admin", "password"))
            .expect("Login failed");
        assert!(!issued.access_token.is_empty());

        let principal = service
            .authorize(&issued.access_token)
            .expect("Authorization failed");
        assert_eq!(principal.user_id, Subject::from("admin"));
        assert_eq!(principal.username, "admin");
    }

    #[test]
    fn test_authorize_rejects_foreign_signature() {
        let service = SessionService::new(identity(), MockPasswordVerifier::new(), SECRET, 24);

        let foreign = JwtHandler::new(b"another_secret_at_least_32_bytes!!");
        let token = foreign
            .encode(&Claims::for_admin("admin", 24))
            .expect("Failed to encode token");

        let result = service.authorize(&token);
        assert!(matches!(result, Err(SessionError::TokenInvalid(_))));
    }

    #[test]
    fn test_authorize_rejects_expired_token() {
        let service = SessionService::new(identity(), MockPasswordVerifier::new(), SECRET, 24);

        let handler = JwtHandler::new(SECRET);
        let token = handler
            .encode(&Claims::for_admin("admin", -2))
            .expect("Failed to encode token");

        let result = service.authorize(&token);
        assert!(matches!(result, Err(SessionError::TokenExpired)));
    }
}
