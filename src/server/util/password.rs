//! Argon2 password hashing.
//!
//! Hashing is CPU-bound, so both operations run on tokio's blocking pool.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password into an Argon2id PHC string with a random 16 byte salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash including algorithm parameters and salt
/// - `Err(AppError::InternalErr)` - Hashing failed or the blocking task was cancelled
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || {
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut salt_bytes);

        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(InternalError::from)??;

    Ok(hash)
}

/// Checks a password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalErr)` - Stored hash is malformed or the task was cancelled
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&password_hash)
            .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        Ok::<_, InternalError>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await
    .map_err(InternalError::from)??;

    Ok(matches)
}
