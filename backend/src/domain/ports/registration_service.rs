//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, User, UserRegistration};

/// Registers new accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Store a new user, failing with `duplicate` when the login or email is
    /// already registered.
    async fn register(&self, registration: UserRegistration) -> Result<User, Error>;
}
