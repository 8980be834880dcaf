//! HTTP Handlers

use axum::http::Uri;
use axum::response::Html;
use kernel::AppError;
use session::CurrentUser;
use std::sync::Arc;

use crate::application::composer::TemplateComposer;
use crate::domain::context::PageContext;
use crate::domain::page::PageSpec;
use crate::error::PageResult;

/// Shared state for page handlers
#[derive(Clone)]
pub struct PagesAppState {
    pub composer: Arc<TemplateComposer>,
}

/// GET for any entry of the page table
///
/// `user` is set on gated pages, where the session middleware ran first.
pub async fn render_page(
    state: PagesAppState,
    page: &'static PageSpec,
    user: Option<CurrentUser>,
) -> PageResult<Html<String>> {
    let context = match user {
        Some(CurrentUser(name)) => PageContext::new(page.title).with_user(name),
        None => PageContext::new(page.title),
    };

    let html = state
        .composer
        .render(page.layout, &page.body_file(), &page.script_file(), &context)
        .await?;

    Ok(Html(html))
}

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route");
    AppError::not_found(format!("Nothing here at {}", uri.path()))
}
