use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::jwt::errors::TokenError;

/// Token payload.
///
/// `sub` carries the principal identifier; `exp` and `iat` are Unix
/// timestamps in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for `subject` valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiration is not representable
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Result<Self, TokenError> {
        Self::issued_at(subject, Utc::now(), ttl)
    }

    /// Create claims as if issued at `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiration is not representable
    pub fn issued_at(
        subject: impl ToString,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expiration = now.checked_add_signed(ttl).ok_or_else(|| {
            TokenError::EncodingFailed(format!("Token lifetime out of range: {}", ttl))
        })?;

        Ok(Self {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        })
    }
}
