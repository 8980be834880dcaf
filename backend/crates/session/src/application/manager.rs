//! Session Manager
//!
//! Reads the session cookie from request headers and produces the
//! `Set-Cookie` values that establish or end a session.

use axum::http::{HeaderMap, HeaderValue};
use platform::cookie::{CookieConfig, delete_cookie_header, extract_cookie, set_cookie_header};

use crate::application::codec::SessionCodec;
use crate::application::config::SessionConfig;
use crate::domain::payload::SessionPayload;
use crate::domain::state::SessionState;
use crate::error::SessionResult;

/// Session manager shared by handlers and middleware
#[derive(Debug, Clone)]
pub struct SessionManager {
    codec: SessionCodec,
    cookie: CookieConfig,
    clear_cookie: HeaderValue,
    anonymous_landing: String,
    authenticated_landing: String,
}

impl SessionManager {
    pub fn new(config: &SessionConfig) -> SessionResult<Self> {
        let cookie = config.cookie();
        let clear_cookie = delete_cookie_header(&cookie)?;

        Ok(Self {
            codec: SessionCodec::from_config(config),
            cookie,
            clear_cookie,
            anonymous_landing: config.anonymous_landing.clone(),
            authenticated_landing: config.authenticated_landing.clone(),
        })
    }

    /// Classify the session cookie carried by a request
    pub fn read(&self, headers: &HeaderMap) -> SessionState {
        let Some(value) = extract_cookie(headers, self.codec.name()) else {
            return SessionState::Anonymous;
        };
        if value.is_empty() {
            return SessionState::Anonymous;
        }

        match self.codec.decode(&value) {
            Ok(payload) => match payload.username() {
                Some(name) => SessionState::Authenticated(name.to_string()),
                None => SessionState::Anonymous,
            },
            Err(e) => {
                e.log();
                SessionState::Corrupt(e)
            }
        }
    }

    /// Signed-in user name, if any
    pub fn username(&self, headers: &HeaderMap) -> Option<String> {
        self.read(headers).into_username()
    }

    /// `Set-Cookie` value establishing a session for `username`
    pub fn write(&self, username: &str) -> SessionResult<HeaderValue> {
        let value = self.codec.encode(&SessionPayload::for_user(username))?;
        Ok(set_cookie_header(&self.cookie, &value)?)
    }

    /// `Set-Cookie` value that makes the browser drop the session
    pub fn clear(&self) -> HeaderValue {
        self.clear_cookie.clone()
    }

    pub fn codec(&self) -> &SessionCodec {
        &self.codec
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    pub fn anonymous_landing(&self) -> &str {
        &self.anonymous_landing
    }

    pub fn authenticated_landing(&self) -> &str {
        &self.authenticated_landing
    }
}
