//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by
//! the session and pages crates:
//! - Common error type and result alias
//! - Error classification mapped to HTTP status codes
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod kind;
}

pub use error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
