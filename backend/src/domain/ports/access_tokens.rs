//! Driven ports for issuing and verifying signed bearer tokens.

use crate::domain::{AccessToken, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by access-token adapters.
    pub enum AccessTokenError {
        /// Signature, structure or subject did not check out.
        Invalid {
            /// Detail reported by the adapter.
            message: String,
        } => "access token rejected: {message}",
        /// The token is past its expiry instant.
        Expired => "access token expired",
        /// The token could not be signed.
        Signing {
            /// Detail reported by the adapter.
            message: String,
        } => "access token signing failed: {message}",
    }
}

/// Mints tokens bound to a user identity.
#[cfg_attr(test, mockall::automock)]
pub trait AccessTokenIssuer: Send + Sync {
    /// Issue a token whose subject is `user`.
    fn issue(&self, user: &UserId) -> Result<AccessToken, AccessTokenError>;
}

/// Validates tokens and recovers their subject.
#[cfg_attr(test, mockall::automock)]
pub trait AccessTokenVerifier: Send + Sync {
    /// Verify signature and expiry, returning the subject.
    fn verify(&self, token: &str) -> Result<UserId, AccessTokenError>;
}
