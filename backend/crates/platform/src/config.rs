//! Environment Configuration Helpers
//!
//! Parsing works on plain string values so it can be tested without
//! touching the process environment; the `*_var*` wrappers read it.

use std::fmt::Display;
use std::str::FromStr;

use zeroize::Zeroizing;

use crate::crypto::from_base64;

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    fn invalid(key: &str, reason: impl Display) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Read a variable, treating empty or whitespace-only values as unset
pub fn var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a variable or fall back to `default`
pub fn var_or(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|| default.to_string())
}

/// Parse a value with [`FromStr`]
pub fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::invalid(key, e))
}

/// Read and parse a variable, or fall back to `default` when unset
pub fn parse_var_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match var(key) {
        Some(value) => parse_value(key, &value),
        None => Ok(default),
    }
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`)
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(
            key,
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

/// Read a boolean flag, or fall back to `default` when unset
pub fn bool_var_or(key: &str, default: bool) -> Result<bool, ConfigError> {
    match var(key) {
        Some(value) => parse_bool(key, &value),
        None => Ok(default),
    }
}

/// Decode base64 key material and check its length
pub fn decode_key(
    key: &str,
    value: &str,
    min_len: usize,
    max_len: usize,
) -> Result<Zeroizing<Vec<u8>>, ConfigError> {
    let bytes = Zeroizing::new(
        from_base64(value.trim()).map_err(|e| ConfigError::invalid(key, e))?,
    );

    if bytes.len() < min_len || bytes.len() > max_len {
        return Err(ConfigError::invalid(
            key,
            format!(
                "decoded to {} bytes, expected {}..={}",
                bytes.len(),
                min_len,
                max_len
            ),
        ));
    }

    Ok(bytes)
}

/// Read optional base64 key material from the environment
pub fn key_var(
    key: &str,
    min_len: usize,
    max_len: usize,
) -> Result<Option<Zeroizing<Vec<u8>>>, ConfigError> {
    var(key)
        .map(|value| decode_key(key, &value, min_len, max_len))
        .transpose()
}
