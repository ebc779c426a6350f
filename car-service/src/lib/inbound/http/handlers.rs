use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::car::errors::CarError;
use crate::domain::make::errors::MakeError;
use crate::domain::user::errors::UserError;

pub mod auth;
pub mod cars;
pub mod makes;
pub mod me;

/// Message returned for every authentication or authorization failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
const SIGNUP_REJECTED_MESSAGE: &str = "Unable to create an account with these credentials";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Successful JSON response with an explicit status code.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Client-facing error.
///
/// `InternalServerError` carries the detail for the log only; the client
/// always receives the same generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
    }
}

/// Fallback for authenticated requests to unknown API paths.
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::Password(::auth::PasswordError::EmptyPassword) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(SIGNUP_REJECTED_MESSAGE.to_string())
            }
            UserError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::Password(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CarError> for ApiError {
    fn from(err: CarError) -> Self {
        match err {
            CarError::InvalidDetails(_) | CarError::UnknownMake(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            CarError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CarError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<MakeError> for ApiError {
    fn from(err: MakeError) -> Self {
        match err {
            MakeError::InvalidName(_) => ApiError::UnprocessableEntity(err.to_string()),
            MakeError::NameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            MakeError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}
