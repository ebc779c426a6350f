use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Duration;
use chrono::Utc;
use tokio::sync::OnceCell;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::Session;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Verified against when the email is unknown, so both signin failure
/// paths pay for one Argon2 verification.
const DUMMY_PASSWORD: &str = "dummy-password-for-unknown-accounts";

/// Domain service implementation for account and session operations.
///
/// Argon2 work runs on the blocking pool so it does not stall other
/// requests on the async workers.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
    dummy_hash: OnceCell<String>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hasher and token issuer
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl,
            dummy_hash: OnceCell::new(),
        }
    }

    async fn run_blocking<T, F>(&self, task: F) -> Result<T, UserError>
    where
        F: FnOnce(&Authenticator) -> T + Send + 'static,
        T: Send + 'static,
    {
        let authenticator = Arc::clone(&self.authenticator);
        tokio::task::spawn_blocking(move || task(&authenticator))
            .await
            .map_err(|e| UserError::Unknown(format!("Blocking task failed: {}", e)))
    }

    async fn dummy_hash(&self) -> Result<String, UserError> {
        self.dummy_hash
            .get_or_try_init(|| async {
                self.run_blocking(|authenticator| authenticator.hash_password(DUMMY_PASSWORD))
                    .await?
                    .map_err(UserError::from)
            })
            .await
            .cloned()
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn sign_up(&self, credentials: Credentials) -> Result<Session, UserError> {
        let password = credentials.password;
        let password_hash = self
            .run_blocking(move |authenticator| authenticator.hash_password(password.as_str()))
            .await??;

        let user = User {
            id: UserId::new(),
            email: credentials.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        let token = self
            .authenticator
            .issue_token(created_user.id, self.token_ttl)?;

        tracing::info!(user_id = %created_user.id, "User signed up");

        Ok(Session {
            user_id: created_user.id,
            token,
        })
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<Session, UserError> {
        let password = credentials.password;

        let Some(user) = self.repository.find_by_email(&credentials.email).await? else {
            let dummy_hash = self.dummy_hash().await?;
            self.run_blocking(move |authenticator| {
                authenticator.verify_password(password.as_str(), &dummy_hash)
            })
            .await??;

            tracing::debug!("Signin rejected");
            return Err(UserError::InvalidCredentials);
        };

        let user_id = user.id;
        let stored_hash = user.password_hash;
        let ttl = self.token_ttl;

        let result = self
            .run_blocking(move |authenticator| {
                authenticator.authenticate(password.as_str(), &stored_hash, user_id, ttl)
            })
            .await?
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!("Signin rejected");
                    UserError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => UserError::Password(err),
                AuthenticationError::TokenError(err) => UserError::Token(err),
            })?;

        tracing::info!(user_id = %user_id, "User signed in");

        Ok(Session {
            user_id,
            token: result.access_token,
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
