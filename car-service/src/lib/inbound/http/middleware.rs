use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use http::header::AUTHORIZATION;
use http::HeaderMap;
use thiserror::Error;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store authenticated user ID in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Why no token could be read from the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MissingTokenError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not valid ASCII")]
    InvalidHeader,

    #[error("Authorization header is not a Bearer token")]
    NotBearer,
}

/// Middleware that validates bearer tokens and adds the principal to request extensions.
///
/// Every rejection produces the same 401 body; the specific reason is only
/// logged. No I/O happens here beyond token verification.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers()).map_err(|e| {
        tracing::warn!(reason = "MISSING_TOKEN", error = %e, "Request rejected");
        ApiError::unauthorized()
    })?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = e.reason(), error = %e, "Request rejected");
        ApiError::unauthorized()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(reason = "MALFORMED", error = %e, "Request rejected");
        ApiError::unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Read the token from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, MissingTokenError> {
    let auth_str = headers
        .get(AUTHORIZATION)
        .ok_or(MissingTokenError::MissingHeader)?
        .to_str()
        .map_err(|_| MissingTokenError::InvalidHeader)?;

    let (scheme, token) = auth_str
        .trim()
        .split_once(' ')
        .ok_or(MissingTokenError::NotBearer)?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(MissingTokenError::NotBearer);
    }

    Ok(token)
}
