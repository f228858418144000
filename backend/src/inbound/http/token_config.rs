//! Access-token signing key configuration.
//!
//! The HS256 secret comes from the environment, either inline or from a file
//! mounted by the orchestrator. It is never hard-coded. Debug builds fall
//! back to a random per-process key so local runs work out of the box;
//! release builds refuse to start without a real key.

pub mod fingerprint;

use std::path::PathBuf;

use mockable::Env;
use rand::RngCore;
use rand::rngs::OsRng;
use tracing::warn;
use zeroize::Zeroizing;

const SECRET_ENV: &str = "AGENDA_JWT_SECRET";
const SECRET_FILE_ENV: &str = "AGENDA_JWT_SECRET_FILE";
const ALLOW_EPHEMERAL_ENV: &str = "AGENDA_JWT_ALLOW_EPHEMERAL";
const SECRET_MIN_LEN: usize = 32;
const EPHEMERAL_KEY_LEN: usize = 64;
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";

/// Build mode for key configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing key and generate one.
    Debug,
    /// Release builds require an explicit key of adequate length.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agenda_backend::inbound::http::token_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// HMAC secret used to sign and verify access tokens. Zeroized on drop.
pub struct SigningKey(Zeroizing<Vec<u8>>);

impl SigningKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: Zeroizing<Vec<u8>>) -> Self {
        Self(bytes)
    }

    /// Random key for processes that do not need tokens to outlive them.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new(vec![0_u8; EPHEMERAL_KEY_LEN]);
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Key material.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningKey").field(&"<redacted>").finish()
    }
}

/// Where the active key came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeySource {
    /// `AGENDA_JWT_SECRET`.
    Inline,
    /// The file named by `AGENDA_JWT_SECRET_FILE`.
    File,
    /// Generated at startup; tokens die with the process.
    Ephemeral,
}

/// Token settings derived from the environment.
#[derive(Debug)]
pub struct TokenSettings {
    /// Signing key for access tokens.
    pub key: SigningKey,
    /// Origin of [`TokenSettings::key`].
    pub source: KeySource,
}

impl TokenSettings {
    fn ephemeral() -> Self {
        Self {
            key: SigningKey::generate(),
            source: KeySource::Ephemeral,
        }
    }
}

/// Errors raised while validating token configuration.
#[derive(thiserror::Error, Debug)]
pub enum TokenConfigError {
    /// No key was configured and ephemeral keys are not allowed.
    #[error("missing required environment variable: AGENDA_JWT_SECRET or AGENDA_JWT_SECRET_FILE")]
    MissingSecret,
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Value as read.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },
    /// Reading the key file failed.
    #[error("failed to read signing key at {path}: {source}")]
    KeyRead {
        /// Key file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The key is too short for release builds.
    #[error("signing key from {origin} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        /// Where the key came from.
        origin: String,
        /// Key length in bytes.
        length: usize,
        /// Minimum accepted length in bytes.
        min_len: usize,
    },
    /// Release builds must not allow ephemeral signing keys.
    #[error("AGENDA_JWT_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build token settings from environment variables and build mode.
///
/// `AGENDA_JWT_SECRET` wins over `AGENDA_JWT_SECRET_FILE` when both are set.
///
/// # Examples
///
/// ```rust
/// use agenda_backend::inbound::http::token_config::{
///     token_settings_from_env, BuildMode, KeySource,
/// };
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "AGENDA_JWT_SECRET" => Some("0123456789abcdef0123456789abcdef".to_owned()),
///     "AGENDA_JWT_ALLOW_EPHEMERAL" => Some("0".to_owned()),
///     _ => None,
/// });
///
/// let settings = token_settings_from_env(&env, BuildMode::Release).unwrap();
/// assert_eq!(settings.source, KeySource::Inline);
/// ```
pub fn token_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<TokenSettings, TokenConfigError> {
    let allow_ephemeral = allow_ephemeral_from_env(env, mode)?;

    if let Some(secret) = env.string(SECRET_ENV).filter(|value| !value.is_empty()) {
        if env.string(SECRET_FILE_ENV).is_some() {
            warn!("both {SECRET_ENV} and {SECRET_FILE_ENV} set; using {SECRET_ENV}");
        }
        let bytes = Zeroizing::new(secret.into_bytes());
        check_length(&bytes, mode, SECRET_ENV)?;
        return Ok(TokenSettings {
            key: SigningKey::from_bytes(bytes),
            source: KeySource::Inline,
        });
    }

    let ephemeral_allowed = mode.is_debug() || allow_ephemeral;
    let Some(raw_path) = env.string(SECRET_FILE_ENV) else {
        if ephemeral_allowed {
            warn!("no signing key configured; using temporary key (dev only)");
            return Ok(TokenSettings::ephemeral());
        }
        return Err(TokenConfigError::MissingSecret);
    };

    let path = PathBuf::from(raw_path);
    match std::fs::read(&path) {
        Ok(bytes) => {
            let bytes = Zeroizing::new(bytes);
            check_length(&bytes, mode, &path.display().to_string())?;
            Ok(TokenSettings {
                key: SigningKey::from_bytes(bytes),
                source: KeySource::File,
            })
        }
        Err(error) if ephemeral_allowed => {
            warn!(
                path = %path.display(),
                error = %error,
                "using temporary signing key (dev only)"
            );
            Ok(TokenSettings::ephemeral())
        }
        Err(error) => Err(TokenConfigError::KeyRead {
            path,
            source: error,
        }),
    }
}

fn check_length(bytes: &[u8], mode: BuildMode, origin: &str) -> Result<(), TokenConfigError> {
    let length = bytes.len();
    if length >= SECRET_MIN_LEN {
        return Ok(());
    }
    if mode.is_debug() {
        warn!(origin, length, "signing key shorter than recommended");
        return Ok(());
    }
    Err(TokenConfigError::KeyTooShort {
        origin: origin.to_owned(),
        length,
        min_len: SECRET_MIN_LEN,
    })
}

fn allow_ephemeral_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<bool, TokenConfigError> {
    let Some(value) = env.string(ALLOW_EPHEMERAL_ENV) else {
        return Ok(false);
    };
    match parse_bool(&value) {
        Some(true) if mode.is_debug() => Ok(true),
        Some(true) => Err(TokenConfigError::EphemeralNotAllowed),
        Some(false) => Ok(false),
        None if mode.is_debug() => {
            warn!(value = %value, "invalid {ALLOW_EPHEMERAL_ENV}; defaulting to disabled");
            Ok(false)
        }
        None => Err(TokenConfigError::InvalidEnv {
            name: ALLOW_EPHEMERAL_ENV,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
