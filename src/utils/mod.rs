//! Utility modules
//!
//! ## Module Organization
//!
//! - **error**: Error types and constructor helpers
//! - **logging**: Subscriber setup and structured security events

pub mod error; // Error handling
pub mod logging; // Logging & monitoring
