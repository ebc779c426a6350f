pub mod sign_in;
pub mod sign_up;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

pub use sign_in::sign_in;
pub use sign_up::sign_up;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordInputError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::Session;
use crate::inbound::http::handlers::ApiError;

/// HTTP request body for signup and signin (raw JSON).
///
/// Missing fields deserialize as empty strings and are rejected by
/// validation, so both cases produce the same 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCredentialsError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordInputError),
}

impl CredentialsRequest {
    fn try_into_credentials(self) -> Result<Credentials, ParseCredentialsError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(Credentials::new(email, password))
    }
}

impl From<ParseCredentialsError> for ApiError {
    fn from(err: ParseCredentialsError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
}

impl From<Session> for TokenResponseData {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
        }
    }
}
