//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: in-memory user and contact stores
//! - **security**: Argon2id password hashing and HS256 JWT access tokens
//!
//! Adapters are thin translators between domain types and the library or
//! storage they wrap. They contain no business logic.

pub mod persistence;
pub mod security;
