//! Credential adapters: Argon2id password hashing and HS256 bearer tokens.

mod argon2_password_hasher;
mod jwt_access_tokens;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use jwt_access_tokens::{DEFAULT_TOKEN_TTL_SECS, JwtAccessTokens, MAX_TOKEN_TTL_SECS};
