//! Application Layer
//!
//! Configuration and the template composer.

pub mod composer;
pub mod config;

pub use composer::TemplateComposer;
pub use config::PagesConfig;
