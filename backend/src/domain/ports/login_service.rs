//! Driving port for login.
//!
//! Inbound adapters call it to exchange credentials for a bearer token
//! without knowing which store or token codec sits behind it.

use async_trait::async_trait;

use crate::domain::{AccessToken, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and issue an access token for the matching user.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AccessToken, Error>;
}
