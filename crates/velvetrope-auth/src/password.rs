//! Password hashing and verification-token generation.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rand::RngExt;

/// Errors from the hashing primitives. Both variants indicate broken
/// configuration or corrupted stored data, never a wrong password; a
/// mismatch is the `Ok(false)` path of [`verify_password`].
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("malformed password hash: {0}")]
    Malformed(String),
}

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// The PHC string embeds algorithm, parameters, and salt, so verification
/// needs no side-channel state. Never logs or returns the plaintext.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// Verification uses the parameters embedded in the hash itself.
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::Malformed(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

/// Charset for email-verification tokens (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Verification token length in characters.
pub const VERIFICATION_TOKEN_LEN: usize = 32;

/// Generate an opaque email-verification token.
pub fn generate_verification_token() -> String {
    let mut rng = rand::rng();
    (0..VERIFICATION_TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
