//! Session Payload
//!
//! The key/value map carried inside the session cookie.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key holding the signed-in user name
pub const EMAIL_KEY: &str = "email";

/// String-to-string map stored in the cookie
///
/// Ordered so that the serialized form is stable for a given content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionPayload(BTreeMap<String, String>);

impl SessionPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload for a signed-in user
    pub fn for_user(username: impl Into<String>) -> Self {
        let mut payload = Self::new();
        payload.insert(EMAIL_KEY, username);
        payload
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Signed-in user name; an empty value counts as absent
    pub fn username(&self) -> Option<&str> {
        self.get(EMAIL_KEY).filter(|name| !name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
