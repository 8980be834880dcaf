//! Session Cookie Codec
//!
//! Turns a [`SessionPayload`] into a tamper-evident cookie value and back.
//!
//! Value layout: `timestamp "." body "." mac`
//! - `timestamp`: Unix seconds at encode time
//! - `body`: base64url of the JSON payload, AES-256-GCM sealed when a block key is set
//! - `mac`: base64url of HMAC-SHA256 over `name|timestamp|body`

use std::time::Duration;

use chrono::Utc;
use platform::crypto::{
    from_base64url, hmac_sha256, open_aes_256_gcm, seal_aes_256_gcm, to_base64url,
    verify_hmac_sha256,
};

use crate::application::config::{SessionConfig, SessionKeys};
use crate::domain::payload::SessionPayload;
use crate::error::{SessionError, SessionResult};

/// Signs, optionally encrypts, and verifies session cookie values
#[derive(Debug, Clone)]
pub struct SessionCodec {
    name: String,
    keys: SessionKeys,
    max_age: Option<Duration>,
}

impl SessionCodec {
    /// Browsers drop cookies larger than this
    pub const MAX_COOKIE_LEN: usize = 4096;

    /// Tolerated clock drift for timestamps from the future
    pub const CLOCK_SKEW_SECS: i64 = 60;

    pub fn new(name: impl Into<String>, keys: SessionKeys, max_age: Option<Duration>) -> Self {
        Self {
            name: name.into(),
            keys,
            max_age,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.cookie_name.clone(),
            config.keys.clone(),
            config.max_age,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encode(&self, payload: &SessionPayload) -> SessionResult<String> {
        self.encode_at(payload, Utc::now().timestamp())
    }

    pub fn decode(&self, value: &str) -> SessionResult<SessionPayload> {
        self.decode_at(value, Utc::now().timestamp())
    }

    /// Encode with an explicit issue time
    pub fn encode_at(&self, payload: &SessionPayload, now: i64) -> SessionResult<String> {
        let json = serde_json::to_vec(payload).map_err(SessionError::Serialize)?;

        let bytes = match self.keys.block_key() {
            Some(key) => seal_aes_256_gcm(key, self.name.as_bytes(), &json)?,
            None => json,
        };

        let body = to_base64url(&bytes);
        let timestamp = now.to_string();
        let mac = hmac_sha256(self.keys.hash_key(), &self.mac_input(&timestamp, &body))?;

        let value = format!("{}.{}.{}", timestamp, body, to_base64url(&mac));
        if value.len() > Self::MAX_COOKIE_LEN {
            return Err(SessionError::TooLong(Self::MAX_COOKIE_LEN));
        }

        Ok(value)
    }

    /// Decode against an explicit current time
    pub fn decode_at(&self, value: &str, now: i64) -> SessionResult<SessionPayload> {
        if value.len() > Self::MAX_COOKIE_LEN {
            return Err(SessionError::TooLong(Self::MAX_COOKIE_LEN));
        }

        let mut parts = value.split('.');
        let (Some(timestamp), Some(body), Some(mac), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SessionError::Malformed("expected three dot-separated parts"));
        };

        let mac = from_base64url(mac)
            .map_err(|_| SessionError::Malformed("signature is not base64url"))?;
        if !verify_hmac_sha256(self.keys.hash_key(), &self.mac_input(timestamp, body), &mac) {
            return Err(SessionError::InvalidSignature);
        }

        let timestamp: i64 = timestamp
            .parse()
            .map_err(|_| SessionError::Malformed("timestamp is not an integer"))?;
        self.check_age(timestamp, now)?;

        let bytes =
            from_base64url(body).map_err(|_| SessionError::Malformed("body is not base64url"))?;

        let json = match self.keys.block_key() {
            Some(key) => open_aes_256_gcm(key, self.name.as_bytes(), &bytes)?,
            None => bytes,
        };

        serde_json::from_slice(&json).map_err(SessionError::Deserialize)
    }

    fn mac_input<'a>(&'a self, timestamp: &'a str, body: &'a str) -> [&'a [u8]; 5] {
        [
            self.name.as_bytes(),
            b"|".as_slice(),
            timestamp.as_bytes(),
            b"|".as_slice(),
            body.as_bytes(),
        ]
    }

    fn check_age(&self, timestamp: i64, now: i64) -> SessionResult<()> {
        if timestamp > now.saturating_add(Self::CLOCK_SKEW_SECS) {
            return Err(SessionError::Expired);
        }

        if let Some(max_age) = self.max_age {
            let max_age = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
            if now.saturating_sub(timestamp) > max_age {
                return Err(SessionError::Expired);
            }
        }

        Ok(())
    }
}
