//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::{SessionAppState, found};
pub use middleware::{CurrentUser, require_session};
pub use router::session_router;
