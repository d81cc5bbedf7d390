/// Credential hashing and verification.
///
/// A pure function pair over bcrypt: no persistence, no policy. Password
/// strength rules live in `validators.rs` and are the registration
/// handler's concern, not this module's.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AppError;

/// Hash a password with a fresh per-call salt.
///
/// Hashing the same input twice yields different strings; both verify.
///
/// # Errors
/// Returns an error only if bcrypt itself fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored bcrypt hash.
///
/// A malformed stored hash is treated as a verification failure, never an
/// error: callers get a deterministic `false` for any input that does not
/// match.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    verify(password, stored_hash).unwrap_or(false)
}
