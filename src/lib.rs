//! # tenant-access
//!
//! Access decision engine for a multi-tenant marketing platform.
//!
//! Given a principal's role and tenant, the engine answers which permissions
//! the role grants, whether one role may manage another, which admin consoles
//! may be opened and which navigation entries are shown. Every answer is a
//! pure function of its inputs and the compiled-in role tables; unrecognized
//! roles and permissions always resolve to "deny".
//!
//! These decisions only decide what a client shows. The backend API remains
//! the enforcement boundary and must re-check every request.
//!
//! ## Quick Start
//!
//! ```rust
//! use tenant_access::{AccessEngine, Capability, Permission, PrincipalContext, Role};
//!
//! let engine = AccessEngine::default();
//! let principal = PrincipalContext::new(Role::TenantMarketer).with_tenant("acme");
//!
//! assert!(engine.has_permission(principal.role, Permission::CampaignsCreate));
//! assert!(!engine.can_manage_role(Role::TenantMarketer, Role::TenantAdmin));
//!
//! let decision = engine.authorize(
//!     &principal,
//!     &Capability::Permission(Permission::TenantDeleteUsers),
//! );
//! assert!(!decision.allowed);
//! ```
//!
//! ## Configuration
//!
//! ```rust,no_run
//! use tenant_access::{AccessEngine, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/access.yaml").await?;
//!     tenant_access::utils::logging::init_logging(config.logging())?;
//!     let engine = AccessEngine::new(config.access.clone());
//!     println!("{} menu entries", engine.config().navigation.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use crate::auth::{
    AccessEngine, AdminSurface, Capability, Decision, DenialReason, Permission,
    PermissionCategory, Role,
};
pub use crate::config::Config;
pub use crate::core::models::{NavigationItem, PrincipalContext, TeamMemberRef};
pub use crate::utils::error::{AccessError, Result};
