//! Signing key fingerprinting for operational visibility.
//!
//! Operators compare fingerprints across replicas to confirm they share one
//! key, without the key itself ever reaching the logs.

use sha2::{Digest, Sha256};

use super::SigningKey;

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Truncated SHA-256 fingerprint of the key: 16 lowercase hex characters.
///
/// # Examples
///
/// ```rust
/// use agenda_backend::inbound::http::token_config::SigningKey;
/// use agenda_backend::inbound::http::token_config::fingerprint::key_fingerprint;
///
/// let fp = key_fingerprint(&SigningKey::generate());
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn key_fingerprint(key: &SigningKey) -> String {
    let digest = Sha256::digest(key.as_bytes());
    hex::encode(digest.iter().take(FINGERPRINT_BYTES).copied().collect::<Vec<u8>>())
}
