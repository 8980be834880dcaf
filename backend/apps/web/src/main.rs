//! Dashboard Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::AppError`.

mod config;

use pages::{PagesConfig, TemplateComposer, site_router};
use session::{AcceptAnyCredentials, SessionConfig, SessionKeys, SessionManager};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dashboard=info,session=info,pages=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server = ServerConfig::from_env()?;

    // Session keys: configured, or ephemeral where allowed
    let keys = SessionKeys::resolve(SessionKeys::from_env()?, server.allow_ephemeral_keys)?;
    let session_config = SessionConfig::from_env(keys)?;

    tracing::info!(
        encrypted = session_config.keys.encrypts(),
        max_age_secs = ?session_config.max_age.map(|age| age.as_secs()),
        secure = session_config.cookie_secure,
        "Session cookies configured"
    );

    let sessions = Arc::new(SessionManager::new(&session_config)?);

    // Templates are parsed once; a broken layout stops startup here
    let pages_config = PagesConfig::from_env();
    let composer = Arc::new(TemplateComposer::new(&pages_config.template_dir)?);

    tracing::info!(
        templates = %pages_config.template_dir.display(),
        statics = %pages_config.static_dir.display(),
        "Templates loaded"
    );

    // Build router
    let app = site_router(composer, sessions, AcceptAnyCredentials, &pages_config)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], server.listen_port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
