//! Authentication primitives for the property-management admin backend.
//!
//! Provides the two building blocks the admin service composes into its
//! session flow:
//! - Password hashing and verification (Argon2id, PHC string format)
//! - Signed session token issuance and validation (JWT, HS256)
//!
//! The service keeps its own domain traits and adapts these implementations,
//! so this crate stays free of HTTP and configuration concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, JwtHandler, Subject};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_admin("admin", 24);
//! let token = handler.encode(&claims).unwrap();
//!
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, Subject::from("admin"));
//! assert_eq!(decoded.username, "admin");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::Subject;
pub use password::validate_hash_format;
pub use password::PasswordError;
pub use password::PasswordHasher;
