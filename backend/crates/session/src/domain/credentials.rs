//! Credential Verification
//!
//! Seam for checking a username/password pair at sign-in.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::SessionResult;

/// Submitted sign-in credentials
pub struct Credentials {
    pub username: String,
    pub password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Both fields non-empty
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential verifier trait
///
/// Called only for complete credentials. `Ok(false)` rejects the
/// sign-in; an error rejects it and is logged.
#[trait_variant::make(CredentialVerifier: Send)]
pub trait LocalCredentialVerifier {
    async fn verify(&self, credentials: &Credentials) -> SessionResult<bool>;
}

/// Accepts every complete username/password pair
///
/// There is no credential store behind the dashboard; this is the
/// placeholder to swap out when one exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyCredentials;

impl CredentialVerifier for AcceptAnyCredentials {
    async fn verify(&self, _credentials: &Credentials) -> SessionResult<bool> {
        Ok(true)
    }
}
