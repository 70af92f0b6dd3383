use std::fmt;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Subject claim that preserves its encoded JSON type.
///
/// Tokens in the wild carry the subject either as a string or as a number.
/// Decoding keeps whichever type was encoded instead of normalizing, and
/// re-serialization emits the same type back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Subject {
    Text(String),
    Numeric(i64),
}

impl Subject {
    /// String form of the subject, when it was encoded as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Subject::Text(s) => Some(s),
            Subject::Numeric(_) => None,
        }
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Subject::Text(s.to_string())
    }
}

impl From<String> for Subject {
    fn from(s: String) -> Self {
        Subject::Text(s)
    }
}

impl From<i64> for Subject {
    fn from(n: i64) -> Self {
        Subject::Numeric(n)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Text(s) => s.fmt(f),
            Subject::Numeric(n) => n.fmt(f),
        }
    }
}

/// Session token claims.
///
/// Exactly the fields the session flow relies on. Unknown claims present in
/// an incoming token are dropped at deserialization and never surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: Subject,

    /// Username of the authenticated principal
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Fixed subject marker for the administrator identity.
    pub const ADMIN_SUBJECT: &'static str = "admin";

    /// Build claims for the administrator session.
    ///
    /// # Arguments
    /// * `username` - Username of the verified identity
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_admin(username: impl Into<String>, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: Subject::from(Self::ADMIN_SUBJECT),
            username: username.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
