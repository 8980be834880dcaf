//! Server Configuration

use platform::config::{ConfigError, parse_bool, parse_value, var};

/// Process-level settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_port: u16,
    /// Fall back to per-process random session keys when none are configured
    pub allow_ephemeral_keys: bool,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8000;

    /// Read `LISTEN_PORT` and `SESSION_EPHEMERAL_KEYS`
    ///
    /// Debug builds always allow ephemeral keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            var("LISTEN_PORT").as_deref(),
            var("SESSION_EPHEMERAL_KEYS").as_deref(),
            cfg!(debug_assertions),
        )
    }

    fn from_values(
        port: Option<&str>,
        ephemeral: Option<&str>,
        debug_build: bool,
    ) -> Result<Self, ConfigError> {
        let listen_port = match port {
            Some(value) => parse_value("LISTEN_PORT", value)?,
            None => Self::DEFAULT_PORT,
        };
        let ephemeral = match ephemeral {
            Some(value) => parse_bool("SESSION_EPHEMERAL_KEYS", value)?,
            None => false,
        };

        Ok(Self {
            listen_port,
            allow_ephemeral_keys: debug_build || ephemeral,
        })
    }
}
