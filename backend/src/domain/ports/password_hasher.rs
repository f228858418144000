//! Driven port for one-way password hashing.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Hashing failed, typically due to invalid parameters.
        Hashing {
            /// Detail reported by the adapter.
            message: String,
        } => "password hashing failed: {message}",
        /// The stored hash could not be parsed.
        MalformedHash {
            /// Detail reported by the adapter.
            message: String,
        } => "stored password hash is malformed: {message}",
    }
}

/// Salted adaptive hash with constant-time verification.
///
/// Synchronous on purpose: callers decide whether to move the work off the
/// async executor.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` under a fresh random salt.
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check `password` against `hash`; `Ok(false)` on mismatch.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}
