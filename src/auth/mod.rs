//! Authorization decisions
//!
//! This module provides the access decision engine: static role and permission
//! tables, hierarchy checks, route guards and navigation filtering. Decisions
//! are advisory; the backend enforces every permission independently.

pub mod authorize;
pub mod navigation;
pub mod rbac;
pub mod types;

// Re-export commonly used types
pub use authorize::{
    authorize, can_manage_member, check_tenant_permission, is_own_row, outranks_member,
};
pub use navigation::{filter_navigation_items, visible_navigation};
pub use rbac::{Permission, PermissionCategory, Role};
pub use types::{AdminSurface, Capability, Decision, DenialReason};

use crate::config::AccessConfig;
use crate::core::models::{NavigationItem, PrincipalContext, TeamMemberRef};
use crate::utils::error::Result;
use crate::utils::logging::SecurityLogger;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Access decision engine
///
/// Stateless apart from its configuration; clones share it.
#[derive(Debug, Clone)]
pub struct AccessEngine {
    /// Access configuration
    config: Arc<AccessConfig>,
}

impl AccessEngine {
    /// Create a new access engine
    pub fn new(config: AccessConfig) -> Self {
        info!("Initializing access decision engine");

        // Build the permission table up front rather than on the first query
        let granted: usize = Role::KNOWN
            .iter()
            .map(|role| rbac::get_role_permissions(*role).len())
            .sum();
        debug!(
            "Role permission table ready: {} roles, {} grants",
            Role::KNOWN.len(),
            granted
        );

        info!(
            "Access decision engine initialized with {} navigation items",
            config.navigation.len()
        );
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Permission set granted to a role; empty for unknown roles
    pub fn get_role_permissions(&self, role: Role) -> &'static HashSet<Permission> {
        rbac::get_role_permissions(role)
    }

    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        rbac::has_permission(role, permission)
    }

    pub fn is_tenant_role(&self, role: Role) -> bool {
        rbac::is_tenant_role(role)
    }

    pub fn is_global_role(&self, role: Role) -> bool {
        rbac::is_global_role(role)
    }

    pub fn can_manage_role(&self, manager: Role, target: Role) -> bool {
        rbac::can_manage_role(manager, target)
    }

    /// Roles a manager may hand out when inviting or editing members
    pub fn assignable_roles(&self, manager: Role) -> Vec<Role> {
        rbac::assignable_roles(manager)
    }

    /// Fail unless `manager` may assign or revoke `target`
    pub fn validate_role_assignment(&self, manager: &PrincipalContext, target: Role) -> Result<()> {
        debug!("Validating assignment of {} by {}", target, manager.role);
        rbac::validate_role_hierarchy(manager.role, target)
    }

    /// Decide whether `principal` may exercise `capability`, logging the outcome
    pub fn authorize(&self, principal: &PrincipalContext, capability: &Capability) -> Decision {
        let decision = authorize::authorize(principal, capability);
        SecurityLogger::log_authz_event(
            principal,
            capability,
            &decision,
            self.config.log_decisions,
            self.config.log_denials,
        );
        decision
    }

    /// Whether `manager` may edit `member`'s row
    ///
    /// The self-service bypass applies only when enabled in the configuration.
    pub fn can_manage_member(&self, manager: &PrincipalContext, member: &TeamMemberRef) -> bool {
        if self.config.allow_self_service {
            authorize::can_manage_member(manager, member)
        } else {
            authorize::outranks_member(manager, member)
        }
    }

    /// Filter caller-supplied navigation items for `role`
    pub fn filter_navigation_items<'a>(
        &self,
        items: &'a [NavigationItem],
        role: Role,
    ) -> impl Iterator<Item = &'a NavigationItem> + 'a {
        navigation::filter_navigation_items(items, role)
    }

    /// Configured menu entries visible to `role`
    pub fn navigation_for(&self, role: Role) -> Vec<&NavigationItem> {
        navigation::filter_navigation_items(&self.config.navigation, role).collect()
    }
}

impl Default for AccessEngine {
    fn default() -> Self {
        Self::new(AccessConfig::default())
    }
}
