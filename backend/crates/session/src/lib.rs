//! Session (Cookie Session) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session payload, session state, credential verification seam
//! - `application/` - Configuration, cookie codec, session manager, sign-in use case
//! - `presentation/` - Login/logout handlers, auth-gate middleware, router
//!
//! ## Security Model
//! - The cookie *is* the session: nothing is stored server-side
//! - Values are HMAC-SHA256 signed and, with a block key, AES-256-GCM encrypted
//! - The signature binds the cookie name and an issue timestamp
//! - An absent, corrupt, expired or foreign cookie degrades to anonymous, never to an error page

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::codec::SessionCodec;
pub use application::config::{SessionConfig, SessionKeys};
pub use application::manager::SessionManager;
pub use domain::credentials::{AcceptAnyCredentials, CredentialVerifier, Credentials};
pub use domain::payload::SessionPayload;
pub use domain::state::SessionState;
pub use error::{SessionError, SessionResult};
pub use presentation::middleware::{CurrentUser, require_session};
pub use presentation::router::session_router;
