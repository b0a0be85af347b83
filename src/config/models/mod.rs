//! Configuration data models
//!
//! This module defines all configuration structures used by the access engine.

pub mod access;
pub mod logging;

// Re-export all configuration types
pub use access::*;
pub use logging::*;

pub fn default_true() -> bool {
    true
}

pub fn default_log_level() -> String {
    "info".to_string()
}
