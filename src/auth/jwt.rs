/// Session token issuance and verification.
///
/// Tokens are HS256 JWTs signed with the process-wide secret from
/// `JwtSettings`. The signature covers the whole claim set, so any mutated
/// claim invalidates the token. Tokens are never persisted; a leaked token
/// stays valid until natural expiry (accepted limitation, no revocation).

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::auth::{Claims, Role};
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError};

/// Issue a token for a user, expiring `token_ttl_seconds` from now.
///
/// # Errors
/// Returns an error if token generation fails.
pub fn issue_token(user_id: &Uuid, role: Role, config: &JwtSettings) -> Result<String, AppError> {
    let claims = Claims::new(*user_id, role, config.token_ttl_seconds);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

/// Verify a token and extract its claims.
///
/// Rejections are distinguished by cause: structure that does not parse is
/// `TokenMalformed`, a signature that does not match the secret (including
/// any tampered claim) is `TokenBadSignature`, and a structurally valid,
/// correctly signed token past its expiry is `TokenExpired`.
pub fn verify_token(token: &str, config: &JwtSettings) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked manually below: the cutoff is exact (a token dies at
    // iat + TTL, no leeway) and the rejection reasons stay distinct.
    validation.validate_exp = false;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => AuthError::TokenBadSignature,
        _ => AuthError::TokenMalformed,
    })?;

    if chrono::Utc::now().timestamp() >= claims.exp {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}
