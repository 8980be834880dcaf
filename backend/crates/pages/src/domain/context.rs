//! Page Context
//!
//! Values exposed to templates while rendering one page.

use serde::Serialize;

/// Per-request rendering context
///
/// Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Document title (`{{ title }}`)
    pub title: &'static str,
    /// Signed-in user on gated pages (`{{ user }}`)
    pub user: Option<String>,
}

impl PageContext {
    pub fn new(title: &'static str) -> Self {
        Self { title, user: None }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}
