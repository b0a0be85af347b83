//! Core data structures
//!
//! Records supplied by callers of the decision engine.

pub mod models;
