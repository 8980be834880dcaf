//! Sign In Use Case
//!
//! Checks submitted credentials and mints the session cookie.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::application::manager::SessionManager;
use crate::domain::credentials::{CredentialVerifier, Credentials};

/// Sign in outcome
#[derive(Debug)]
pub enum SignInOutcome {
    /// Credentials accepted
    ///
    /// `set_cookie` is `None` when the cookie could not be encoded; the
    /// caller still lands the user on the authenticated page.
    Authenticated {
        username: String,
        set_cookie: Option<HeaderValue>,
    },
    /// Incomplete or refused credentials
    Rejected,
}

/// Sign in use case
pub struct SignInUseCase<V>
where
    V: CredentialVerifier,
{
    verifier: Arc<V>,
    manager: Arc<SessionManager>,
}

impl<V> SignInUseCase<V>
where
    V: CredentialVerifier,
{
    pub fn new(verifier: Arc<V>, manager: Arc<SessionManager>) -> Self {
        Self { verifier, manager }
    }

    pub async fn execute(&self, credentials: Credentials) -> SignInOutcome {
        // Incomplete forms never reach the verifier
        if !credentials.is_complete() {
            tracing::debug!("Sign-in rejected: missing email or password");
            return SignInOutcome::Rejected;
        }

        match self.verifier.verify(&credentials).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::info!(user = %credentials.username, "Sign-in refused by verifier");
                return SignInOutcome::Rejected;
            }
            Err(e) => {
                e.log();
                return SignInOutcome::Rejected;
            }
        }

        let set_cookie = match self.manager.write(&credentials.username) {
            Ok(value) => Some(value),
            Err(e) => {
                e.log();
                None
            }
        };

        tracing::info!(user = %credentials.username, "User signed in");

        SignInOutcome::Authenticated {
            username: credentials.username,
            set_cookie,
        }
    }
}
