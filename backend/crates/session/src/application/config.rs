//! Application Configuration
//!
//! Configuration for the session application layer.

use std::fmt;
use std::time::Duration;

use platform::config::{ConfigError, bool_var_or, key_var, parse_var_or};
use platform::cookie::CookieConfig;
use platform::crypto::{AES_256_KEY_LEN, random_array, random_bytes};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SessionError, SessionResult};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Signing key plus optional encryption key
///
/// Wiped from memory on drop. `Debug` never prints key bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SessionKeys {
    hash_key: Vec<u8>,
    block_key: Option<[u8; AES_256_KEY_LEN]>,
}

impl SessionKeys {
    pub const HASH_KEY_MIN_LEN: usize = 32;
    pub const HASH_KEY_MAX_LEN: usize = 128;
    pub const GENERATED_HASH_KEY_LEN: usize = 64;

    pub const HASH_KEY_VAR: &'static str = "SESSION_HASH_KEY";
    pub const BLOCK_KEY_VAR: &'static str = "SESSION_BLOCK_KEY";

    /// Build from raw key material
    ///
    /// The hash key must be 32..=128 bytes; the block key, when given,
    /// exactly 32 bytes (AES-256).
    pub fn new(hash_key: &[u8], block_key: Option<&[u8]>) -> SessionResult<Self> {
        if !(Self::HASH_KEY_MIN_LEN..=Self::HASH_KEY_MAX_LEN).contains(&hash_key.len()) {
            return Err(SessionError::InvalidKey(format!(
                "hash key must be {}..={} bytes, got {}",
                Self::HASH_KEY_MIN_LEN,
                Self::HASH_KEY_MAX_LEN,
                hash_key.len()
            )));
        }

        let block_key = block_key
            .map(|key| {
                <[u8; AES_256_KEY_LEN]>::try_from(key).map_err(|_| {
                    SessionError::InvalidKey(format!(
                        "block key must be {} bytes, got {}",
                        AES_256_KEY_LEN,
                        key.len()
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            hash_key: hash_key.to_vec(),
            block_key,
        })
    }

    /// Fresh random signing and encryption keys
    pub fn generate() -> Self {
        Self {
            hash_key: random_bytes(Self::GENERATED_HASH_KEY_LEN),
            block_key: Some(random_array::<AES_256_KEY_LEN>()),
        }
    }

    /// Load keys from `SESSION_HASH_KEY` / `SESSION_BLOCK_KEY` (base64)
    ///
    /// Returns `None` when neither is set. A block key without a hash
    /// key is a configuration error.
    pub fn from_env() -> SessionResult<Option<Self>> {
        let hash_key = key_var(
            Self::HASH_KEY_VAR,
            Self::HASH_KEY_MIN_LEN,
            Self::HASH_KEY_MAX_LEN,
        )?;
        let block_key = key_var(Self::BLOCK_KEY_VAR, AES_256_KEY_LEN, AES_256_KEY_LEN)?;

        match (hash_key, block_key) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(ConfigError::Missing(Self::HASH_KEY_VAR.to_string()).into()),
            (Some(hash_key), block_key) => {
                Self::new(&hash_key, block_key.as_deref().map(Vec::as_slice)).map(Some)
            }
        }
    }

    /// Pick configured keys, or ephemeral ones when that is allowed
    ///
    /// Ephemeral keys live only as long as the process: every restart
    /// signs users out.
    pub fn resolve(configured: Option<Self>, allow_ephemeral: bool) -> SessionResult<Self> {
        match configured {
            Some(keys) => Ok(keys),
            None if allow_ephemeral => {
                tracing::warn!(
                    "No session key material configured, using ephemeral keys; \
                     sessions will not survive a restart"
                );
                Ok(Self::generate())
            }
            None => Err(ConfigError::Missing(Self::HASH_KEY_VAR.to_string()).into()),
        }
    }

    pub fn hash_key(&self) -> &[u8] {
        &self.hash_key
    }

    pub fn block_key(&self) -> Option<&[u8; AES_256_KEY_LEN]> {
        self.block_key.as_ref()
    }

    /// Whether cookie contents are encrypted, not just signed
    pub fn encrypts(&self) -> bool {
        self.block_key.is_some()
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("hash_key", &format_args!("<{} bytes>", self.hash_key.len()))
            .field("encrypts", &self.encrypts())
            .finish()
    }
}

/// Session application configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session cookie name
    pub cookie_name: String,
    /// Signing / encryption keys
    pub keys: SessionKeys,
    /// Oldest accepted issue timestamp (`None` disables the check)
    pub max_age: Option<Duration>,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Where anonymous visitors are sent
    pub anonymous_landing: String,
    /// Where a successful sign-in lands
    pub authenticated_landing: String,
}

impl SessionConfig {
    pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(30 * 24 * 3600); // 30 days

    pub fn new(keys: SessionKeys) -> Self {
        Self {
            cookie_name: "session".to_string(),
            keys,
            max_age: Some(Self::DEFAULT_MAX_AGE),
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
            anonymous_landing: "/".to_string(),
            authenticated_landing: "/main".to_string(),
        }
    }

    /// Create config with random keys (for development and tests)
    pub fn with_random_keys() -> Self {
        Self::new(SessionKeys::generate())
    }

    /// Apply `SESSION_MAX_AGE_SECS` and `COOKIE_SECURE` from the environment
    pub fn from_env(keys: SessionKeys) -> SessionResult<Self> {
        let max_age_secs =
            parse_var_or("SESSION_MAX_AGE_SECS", Self::DEFAULT_MAX_AGE.as_secs())?;
        let cookie_secure = bool_var_or("COOKIE_SECURE", false)?;

        Ok(Self {
            max_age: (max_age_secs > 0).then(|| Duration::from_secs(max_age_secs)),
            cookie_secure,
            ..Self::new(keys)
        })
    }

    /// Cookie attributes for the session cookie (browser-session lifetime)
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}
