//! Core data models
//!
//! Inputs the decision engine consumes from its callers.

pub mod navigation;
pub mod principal;

// Re-export commonly used types
pub use navigation::NavigationItem;
pub use principal::{PrincipalContext, TeamMemberRef};
