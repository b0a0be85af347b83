//! Error handling utilities
//!
//! The decision queries themselves never fail; these errors cover configuration
//! loading, strict parsing of inbound role/permission strings and explicit
//! hierarchy validation.

pub mod error;

// Re-export commonly used types and functions
pub use error::*;
