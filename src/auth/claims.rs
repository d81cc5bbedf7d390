/// Session token claims.
///
/// The self-contained payload carried inside a signed token: subject id,
/// role, and the issued-at/expiry timestamps. Validity is determined
/// entirely by signature and expiry at verification time; nothing is
/// persisted server-side.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Role;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Role assigned at registration
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims expiring `ttl_seconds` from now.
    pub fn new(user_id: Uuid, role: Role, ttl_seconds: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            role,
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Extract the subject's user ID.
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid UUID.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::Internal("Invalid user ID in token".to_string()))
    }
}
