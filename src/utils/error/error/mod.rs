//! Error handling for the access engine
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod types;

pub use types::{AccessError, Result};
