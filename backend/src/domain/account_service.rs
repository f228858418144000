//! Account domain service.
//!
//! Implements registration, login and the users listing over a credential
//! store, a password hasher and an access-token issuer. Argon2 work runs on
//! Tokio's blocking pool so request workers stay responsive.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    AccessTokenError, AccessTokenIssuer, LoginService, PasswordHashError, PasswordHasher,
    RegistrationService, UserPersistenceError, UserRepository, UsersQuery,
};
use crate::domain::{
    AccessToken, Error, LoginCredentials, PasswordHash, User, UserRegistration, messages,
};

/// Account service implementing the login, registration and users ports.
#[derive(Clone)]
pub struct AccountService<U, H, T> {
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U, H, T> AccountService<U, H, T> {
    /// Create a new service over the given adapters.
    pub fn new(users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

impl<U, H, T> AccountService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    T: AccessTokenIssuer,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Duplicate { field } => {
                Error::duplicate(messages::USER_EXISTS).with_details(json!({
                    "field": field,
                    "code": "already_registered",
                }))
            }
            UserPersistenceError::Unavailable { message } => {
                Error::internal(format!("user repository unavailable: {message}"))
            }
        }
    }

    fn map_hash_error(error: PasswordHashError) -> Error {
        Error::internal(error.to_string())
    }

    fn map_token_error(error: AccessTokenError) -> Error {
        Error::internal(format!("failed to issue access token: {error}"))
    }

    fn rejected_login() -> Error {
        Error::invalid_credentials(messages::INVALID_LOGIN)
    }

    async fn hash_password(&self, password: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        run_blocking(move || hasher.hash(&password))
            .await?
            .map_err(Self::map_hash_error)
    }

    async fn verify_password(
        &self,
        password: &str,
        hash: PasswordHash,
    ) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        run_blocking(move || hasher.verify(&password, &hash))
            .await?
            .map_err(Self::map_hash_error)
    }
}

async fn run_blocking<F, R>(task: F) -> Result<R, Error>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| Error::internal(format!("blocking task failed: {err}")))
}

#[async_trait]
impl<U, H, T> RegistrationService for AccountService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    T: AccessTokenIssuer,
{
    async fn register(&self, registration: UserRegistration) -> Result<User, Error> {
        let hash = self.hash_password(registration.password()).await?;
        let user = self
            .users
            .insert(registration.into_record(hash))
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<U, H, T> LoginService for AccountService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    T: AccessTokenIssuer,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error> {
        let Some(record) = self
            .users
            .find_by_login(credentials.login())
            .await
            .map_err(Self::map_persistence_error)?
        else {
            warn!(reason = "unknown_login", "login rejected");
            return Err(Self::rejected_login());
        };

        let verified = self
            .verify_password(credentials.password(), record.password_hash().clone())
            .await?;
        if !verified {
            warn!(user_id = %record.user().id(), reason = "password_mismatch", "login rejected");
            return Err(Self::rejected_login());
        }

        let token = self
            .tokens
            .issue(record.user().id())
            .map_err(Self::map_token_error)?;
        info!(user_id = %record.user().id(), expires_at = %token.expires_at(), "login succeeded");
        Ok(token)
    }
}

#[async_trait]
impl<U, H, T> UsersQuery for AccountService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    T: AccessTokenIssuer,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(Self::map_persistence_error)
    }
}

#[cfg(test)]
mod tests;
