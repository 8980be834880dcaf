//! Pages (Server-Rendered Dashboard) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Page context, layout variants, the page table
//! - `application/` - Directory configuration, template composer
//! - `presentation/` - Generic page handler, static mounts, routers
//!
//! ## Rendering Model
//! - Base layouts are parsed once at startup and never modified
//! - Every request renders a private clone extended with its body and script
//! - Output is buffered; a template failure becomes a clean 500 page

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::composer::TemplateComposer;
pub use application::config::{PagesConfig, STATIC_MOUNTS};
pub use domain::context::PageContext;
pub use domain::layout::LayoutVariant;
pub use domain::page::{PAGES, PageSpec};
pub use error::{PageError, PageResult};
pub use presentation::router::{pages_router, site_router, static_router};

#[cfg(test)]
mod tests;
