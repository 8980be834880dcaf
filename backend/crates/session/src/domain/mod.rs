//! Domain Layer
//!
//! Session vocabulary shared by the codec, the manager and the handlers.

pub mod credentials;
pub mod payload;
pub mod state;
