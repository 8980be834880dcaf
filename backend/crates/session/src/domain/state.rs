//! Session State
//!
//! Result of reading the session cookie from a request.

use crate::error::SessionError;

/// What a request's session cookie amounts to
///
/// `Anonymous` and `Corrupt` are handled the same way by callers (the
/// user is treated as signed out); they are kept apart so the reason
/// can be logged and tested.
#[derive(Debug)]
pub enum SessionState {
    /// Valid cookie naming a user
    Authenticated(String),
    /// No cookie, an empty one, or a valid one without a user name
    Anonymous,
    /// Cookie present but rejected by the codec
    Corrupt(SessionError),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn into_username(self) -> Option<String> {
        match self {
            SessionState::Authenticated(name) => Some(name),
            _ => None,
        }
    }
}
