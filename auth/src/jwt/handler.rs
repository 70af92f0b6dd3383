use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding session tokens.
///
/// Generic over the claims type so tests can craft arbitrary payloads.
/// Uses HS256 (HMAC with SHA-256) with a process-wide secret.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a signing secret.
    ///
    /// The secret should be at least 256 bits (32 bytes) for HS256 and must
    /// come from configuration, never from source.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Verifies the signature and the algorithm, and requires a valid `exp`
    /// claim. Expiration is enforced unconditionally; a token without `exp`
    /// is rejected.
    ///
    /// # Errors
    /// * `TokenExpired` - The `exp` claim is in the past
    /// * `InvalidToken` - Signature or algorithm mismatch (tampering)
    /// * `DecodingFailed` - Token is malformed or missing required claims
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    JwtError::InvalidToken(e.to_string())
                }
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::jwt::Claims;
    use crate::jwt::Subject;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);
        let claims = Claims::for_admin("admin", 24);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded: Claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode::<Claims>("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&Claims::for_admin("admin", 24))
            .expect("Failed to encode token");

        let result = handler2.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);

        let now = Utc::now();
        let claims = Claims {
            sub: Subject::from("admin"),
            username: "admin".to_string(),
            iat: (now - Duration::hours(3)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };

        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_decode_preserves_numeric_subject() {
        #[derive(Serialize)]
        struct NumericSubjectClaims {
            sub: i64,
            username: String,
            iat: i64,
            exp: i64,
        }

        let handler = JwtHandler::new(SECRET);
        let now = Utc::now();

        let token = handler
            .encode(&NumericSubjectClaims {
                sub: 42,
                username: "admin".to_string(),
                iat: now.timestamp(),
                exp: (now + Duration::hours(1)).timestamp(),
            })
            .expect("Failed to encode token");

        let decoded: Claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded.sub, Subject::Numeric(42));
    }

    #[test]
    fn test_decode_drops_extra_claims() {
        #[derive(Serialize)]
        struct WideClaims {
            sub: String,
            username: String,
            iat: i64,
            exp: i64,
            role: String,
        }

        let handler = JwtHandler::new(SECRET);
        let now = Utc::now();

        let token = handler
            .encode(&WideClaims {
                sub: "1".to_string(),
                username: "admin".to_string(),
                iat: now.timestamp(),
                exp: (now + Duration::hours(1)).timestamp(),
                role: "superuser".to_string(),
            })
            .expect("Failed to encode token");

        let decoded: Claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded.sub, Subject::Text("1".to_string()));
        assert_eq!(decoded.username, "admin");
    }
}
