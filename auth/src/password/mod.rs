pub mod argon2;
pub mod errors;

pub use argon2::validate_hash_format;
pub use argon2::PasswordHasher;
pub use errors::PasswordError;
