//! Session Error Types
//!
//! Session-specific error variants, classified with the shared
//! `kernel::ErrorKind`.

use axum::http::header::InvalidHeaderValue;
use kernel::ErrorKind;
use platform::config::ConfigError;
use platform::crypto::CryptoError;
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific error variants
#[derive(Debug, Error)]
pub enum SessionError {
    /// Payload could not be serialized
    #[error("Session payload serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Payload could not be deserialized after verification
    #[error("Session payload deserialization failed: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// Cookie value does not have the expected shape
    #[error("Session cookie is malformed: {0}")]
    Malformed(&'static str),

    /// Signature mismatch (tampered value, foreign cookie, or rotated key)
    #[error("Session cookie signature is invalid")]
    InvalidSignature,

    /// Issue timestamp is older than the max age or too far in the future
    #[error("Session cookie timestamp is outside the accepted window")]
    Expired,

    /// Encoded value would not fit in a cookie
    #[error("Encoded session value exceeds {0} bytes")]
    TooLong(usize),

    /// Encryption or decryption failure
    #[error("Session crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Key material has the wrong shape
    #[error("Invalid session key material: {0}")]
    InvalidKey(String),

    /// Cookie could not be turned into a header value
    #[error("Invalid Set-Cookie header: {0}")]
    Header(#[from] InvalidHeaderValue),

    /// Environment configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential verifier failure
    #[error("Credential verification failed: {0}")]
    Verifier(String),
}

impl SessionError {
    /// Get the ErrorKind for this error
    ///
    /// Everything that can come out of decoding a client-supplied cookie
    /// is `Unauthorized`; the rest is a server fault.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Deserialize(_)
            | SessionError::Malformed(_)
            | SessionError::InvalidSignature
            | SessionError::Expired
            | SessionError::TooLong(_)
            | SessionError::Crypto(CryptoError::Open) => ErrorKind::Unauthorized,
            SessionError::Serialize(_)
            | SessionError::Crypto(_)
            | SessionError::InvalidKey(_)
            | SessionError::Header(_)
            | SessionError::Config(_)
            | SessionError::Verifier(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Session error");
        } else {
            tracing::debug!(error = %self, "Session cookie rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failures_are_unauthorized() {
        let cases = [
            SessionError::Malformed("x"),
            SessionError::InvalidSignature,
            SessionError::Expired,
            SessionError::TooLong(4096),
            SessionError::Crypto(CryptoError::Open),
        ];
        for error in cases {
            assert_eq!(error.kind(), ErrorKind::Unauthorized, "{error}");
        }
    }

    #[test]
    fn test_server_faults_are_internal() {
        let cases = [
            SessionError::Crypto(CryptoError::Seal),
            SessionError::InvalidKey("short".into()),
            SessionError::Config(ConfigError::Missing("SESSION_HASH_KEY".into())),
            SessionError::Verifier("backend down".into()),
        ];
        for error in cases {
            assert_eq!(error.kind(), ErrorKind::InternalServerError, "{error}");
        }
    }

    #[test]
    fn test_error_display() {
        assert!(
            SessionError::InvalidSignature
                .to_string()
                .contains("signature")
        );
        assert!(SessionError::TooLong(4096).to_string().contains("4096"));
    }
}
