//! Session Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::manager::SessionManager;
use crate::domain::credentials::CredentialVerifier;
use crate::presentation::handlers::{self, SessionAppState};

/// Create the session router (`/login`, `/logout`)
pub fn session_router<V>(manager: Arc<SessionManager>, verifier: V) -> Router
where
    V: CredentialVerifier + Clone + Sync + 'static,
{
    let state = SessionAppState {
        manager,
        verifier: Arc::new(verifier),
    };

    Router::new()
        .route("/login", post(handlers::login::<V>))
        .route(
            "/logout",
            get(handlers::logout::<V>).post(handlers::logout::<V>),
        )
        .with_state(state)
}
