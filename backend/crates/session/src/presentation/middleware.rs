//! Session Middleware
//!
//! Gate for pages that require a signed-in user.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::manager::SessionManager;
use crate::domain::state::SessionState;
use crate::presentation::handlers::found;

/// Signed-in user, stored in request extensions by [`require_session`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

/// Middleware that requires a valid session cookie
///
/// Anonymous or corrupt sessions are sent to the anonymous landing page.
pub async fn require_session(
    State(manager): State<Arc<SessionManager>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match manager.read(req.headers()) {
        SessionState::Authenticated(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            next.run(req).await
        }
        SessionState::Anonymous => {
            tracing::debug!(path = %req.uri().path(), cookie = "absent", "Session required");
            found(manager.anonymous_landing(), None)
        }
        SessionState::Corrupt(_) => {
            tracing::debug!(path = %req.uri().path(), cookie = "corrupt", "Session required");
            found(manager.anonymous_landing(), None)
        }
    }
}
