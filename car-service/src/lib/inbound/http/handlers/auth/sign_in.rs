use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::CredentialsRequest;
use super::ParseCredentialsError;
use super::TokenResponseData;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let Json(body) = payload?;

    // A malformed email cannot belong to any account
    let credentials = body.try_into_credentials().map_err(|e| match e {
        ParseCredentialsError::Email(EmailError::InvalidFormat(_)) => {
            ApiError::from(UserError::InvalidCredentials)
        }
        other => ApiError::from(other),
    })?;

    state
        .user_service
        .sign_in(credentials)
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, session.into()))
}
