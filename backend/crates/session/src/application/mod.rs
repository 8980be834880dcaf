//! Application Layer
//!
//! Configuration, the cookie codec, the session manager and use cases.

pub mod codec;
pub mod config;
pub mod manager;
pub mod sign_in;

// Re-exports
pub use codec::SessionCodec;
pub use config::{SessionConfig, SessionKeys};
pub use manager::SessionManager;
pub use sign_in::{SignInOutcome, SignInUseCase};
