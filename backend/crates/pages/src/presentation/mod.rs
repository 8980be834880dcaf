//! Presentation Layer
//!
//! Page handler, static mounts and routers.

pub mod handlers;
pub mod router;

pub use handlers::{PagesAppState, not_found, render_page};
pub use router::{pages_router, site_router, static_router};
