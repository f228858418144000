//! Authentication primitives: login credentials and issued access tokens.
//!
//! Handlers parse raw strings into these types before talking to a port, so
//! services never see half-validated input.

use std::fmt;

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Login handle was missing or empty.
    #[error("login must not be empty")]
    EmptyLogin,
    /// Password was missing or empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by the account service.
///
/// ## Invariants
/// - `login` is non-empty and kept verbatim; lookups are exact matches.
/// - `password` is non-empty and retains caller-provided whitespace.
///
/// # Examples
/// ```
/// use agenda_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("usuario1", "senha123").unwrap();
/// assert_eq!(creds.login(), "usuario1");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    login: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw login/password inputs.
    pub fn try_from_parts(login: &str, password: &str) -> Result<Self, LoginValidationError> {
        if login.is_empty() {
            return Err(LoginValidationError::EmptyLogin);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            login: login.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Login handle used for the user lookup.
    pub fn login(&self) -> &str {
        self.login.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed bearer token handed to a client after a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Wrap an encoded token and its expiry instant.
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Compact encoded token.
    pub fn as_str(&self) -> &str {
        self.token.as_str()
    }

    /// Instant after which the token is rejected.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Consume the wrapper, returning the encoded token.
    pub fn into_string(self) -> String {
        self.token
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
