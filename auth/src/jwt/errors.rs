use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures carry one of three reasons. They are meant for
/// logs; callers facing a client should collapse them into one response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature does not match")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

impl TokenError {
    /// Stable label for the failure, suitable as a structured log field.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Malformed(_) => "MALFORMED",
            TokenError::BadSignature => "BAD_SIGNATURE",
            TokenError::Expired => "EXPIRED",
            TokenError::EncodingFailed(_) => "ENCODING_FAILED",
        }
    }
}
