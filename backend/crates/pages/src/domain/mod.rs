//! Domain Layer
//!
//! Page context, layout variants and the static page table.

pub mod context;
pub mod layout;
pub mod page;

pub use context::PageContext;
pub use layout::LayoutVariant;
pub use page::{PAGES, PageSpec};
