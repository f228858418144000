//! HS256 JWT adapter for the access-token ports.
//!
//! Claims are `sub` (user id), `iat` and `exp`. The library's own expiry check
//! reads the system time, so it is disabled and `exp` is compared against the
//! injected clock instead, with zero leeway.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{AccessTokenError, AccessTokenIssuer, AccessTokenVerifier};
use crate::domain::{AccessToken, UserId};

/// Default token lifetime in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Longest accepted token lifetime in seconds (one year).
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 3600;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Symmetric HS256 token codec.
pub struct JwtAccessTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl JwtAccessTokens {
    /// Build a codec signing with `secret`; tokens live for `ttl`.
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
            clock,
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }
}

impl AccessTokenIssuer for JwtAccessTokens {
    fn issue(&self, user: &UserId) -> Result<AccessToken, AccessTokenError> {
        let issued_at = self.now();
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AccessTokenError::signing("expiry is out of range"))?;
        let claims = Claims {
            sub: user.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| AccessTokenError::signing(err.to_string()))?;
        Ok(AccessToken::new(token, expires_at))
    }
}

impl AccessTokenVerifier for JwtAccessTokens {
    fn verify(&self, token: &str) -> Result<UserId, AccessTokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|err| AccessTokenError::invalid(err.to_string()))?;
        if data.claims.exp <= self.now().timestamp() {
            return Err(AccessTokenError::expired());
        }
        UserId::new(&data.claims.sub).map_err(|err| AccessTokenError::invalid(err.to_string()))
    }
}
