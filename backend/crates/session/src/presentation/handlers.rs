//! HTTP Handlers

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::AppError;
use std::sync::Arc;

use crate::application::manager::SessionManager;
use crate::application::sign_in::{SignInOutcome, SignInUseCase};
use crate::domain::credentials::CredentialVerifier;
use crate::presentation::dto::LoginForm;

/// Shared state for session handlers
#[derive(Clone)]
pub struct SessionAppState<V>
where
    V: CredentialVerifier + Clone + Sync + 'static,
{
    pub manager: Arc<SessionManager>,
    pub verifier: Arc<V>,
}

/// `302 Found` to `location`, optionally setting a cookie
///
/// axum's `Redirect` only offers 303/307/308.
pub fn found(location: &str, set_cookie: Option<HeaderValue>) -> Response {
    let Ok(location) = HeaderValue::try_from(location) else {
        tracing::error!(location, "Redirect target is not a valid header value");
        return AppError::internal("Invalid redirect target").into_response();
    };

    let mut response = StatusCode::FOUND.into_response();
    let headers = response.headers_mut();
    headers.insert(header::LOCATION, location);
    if let Some(cookie) = set_cookie {
        headers.insert(header::SET_COOKIE, cookie);
    }
    response
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<V>(
    State(state): State<SessionAppState<V>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response
where
    V: CredentialVerifier + Clone + Sync + 'static,
{
    // An unreadable body counts as an empty form
    let form = match form {
        Ok(Form(pairs)) => LoginForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable login form");
            LoginForm::default()
        }
    };

    let use_case = SignInUseCase::new(state.verifier.clone(), state.manager.clone());

    match use_case.execute(form.into_credentials()).await {
        SignInOutcome::Authenticated { set_cookie, .. } => {
            found(state.manager.authenticated_landing(), set_cookie)
        }
        SignInOutcome::Rejected => found(state.manager.anonymous_landing(), None),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET|POST /logout
pub async fn logout<V>(State(state): State<SessionAppState<V>>, headers: HeaderMap) -> Response
where
    V: CredentialVerifier + Clone + Sync + 'static,
{
    match state.manager.username(&headers) {
        Some(user) => tracing::info!(user = %user, "User signed out"),
        None => tracing::debug!("Logout without an active session"),
    }

    found(
        state.manager.anonymous_landing(),
        Some(state.manager.clear()),
    )
}
