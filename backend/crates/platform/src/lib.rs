//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, AES-256-GCM, Base64url)
//! - Cookie header building and parsing
//! - Environment configuration parsing

pub mod config;
pub mod cookie;
pub mod crypto;
