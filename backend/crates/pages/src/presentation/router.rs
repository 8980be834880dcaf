//! Page Routers

use axum::{
    Router,
    extract::State,
    http::Extensions,
    middleware::from_fn_with_state,
    routing::get,
};
use session::{CredentialVerifier, CurrentUser, SessionManager, require_session, session_router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::application::composer::TemplateComposer;
use crate::application::config::{PagesConfig, STATIC_MOUNTS};
use crate::domain::page::PAGES;
use crate::presentation::handlers::{self, PagesAppState};

/// One GET route per page table entry
///
/// Gated entries run `require_session` before the handler.
pub fn pages_router(composer: Arc<TemplateComposer>, sessions: Arc<SessionManager>) -> Router {
    let state = PagesAppState { composer };

    PAGES
        .iter()
        .fold(Router::new(), |router, page| {
            let route = get(
                move |State(state): State<PagesAppState>, extensions: Extensions| async move {
                    let user = extensions.get::<CurrentUser>().cloned();
                    handlers::render_page(state, page, user).await
                },
            );

            let route = if page.auth_required {
                route.route_layer(from_fn_with_state(sessions.clone(), require_session))
            } else {
                route
            };

            router.route(page.path, route)
        })
        .with_state(state)
}

/// Static asset mounts, served with the prefix stripped
pub fn static_router(config: &PagesConfig) -> Router {
    STATIC_MOUNTS.iter().fold(Router::new(), |router, mount| {
        router.nest_service(&format!("/{mount}"), ServeDir::new(config.mount_dir(mount)))
    })
}

/// Full site: login/logout, pages, static mounts and the 404 fallback
pub fn site_router<V>(
    composer: Arc<TemplateComposer>,
    sessions: Arc<SessionManager>,
    verifier: V,
    config: &PagesConfig,
) -> Router
where
    V: CredentialVerifier + Clone + Sync + 'static,
{
    session_router(sessions.clone(), verifier)
        .merge(pages_router(composer, sessions))
        .merge(static_router(config))
        .fallback(handlers::not_found)
}
