//! Role hierarchy and role classification

use crate::utils::error::{AccessError, Result};

use super::types::Role;

impl Role {
    /// Rank in the management hierarchy, higher outranks lower
    ///
    /// `Unknown` has no rank and can neither manage nor be managed.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Role::User => Some(0),
            Role::TenantAnalyst => Some(1),
            Role::TenantMarketer => Some(2),
            Role::TenantAdmin => Some(3),
            Role::SuperAdmin => Some(10),
            Role::Unknown => None,
        }
    }

    /// Human-readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::TenantAdmin => "Tenant Admin",
            Role::TenantMarketer => "Marketer",
            Role::TenantAnalyst => "Analyst",
            Role::User => "User",
            Role::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Manages tenants, global settings and platform billing",
            Role::TenantAdmin => "Full control of the organization, its team and billing",
            Role::TenantMarketer => "Creates and runs campaigns, creatives and budgets",
            Role::TenantAnalyst => "Reads campaign performance, reports and invoices",
            Role::User => "Signed in without an organization role",
            Role::Unknown => "Unrecognized role with no access",
        }
    }
}

/// Whether a role is scoped to a single tenant
pub fn is_tenant_role(role: Role) -> bool {
    matches!(
        role,
        Role::TenantAdmin | Role::TenantMarketer | Role::TenantAnalyst
    )
}

/// Whether a role is platform-wide
pub fn is_global_role(role: Role) -> bool {
    role == Role::SuperAdmin
}

/// Whether `manager` strictly outranks `target`
///
/// Equal ranks never manage each other, the same role included. Self-service
/// edits are decided outside this check.
pub fn can_manage_role(manager: Role, target: Role) -> bool {
    match (manager.rank(), target.rank()) {
        (Some(manager_level), Some(target_level)) => manager_level > target_level,
        _ => false,
    }
}

/// Roles `manager` may assign, in ascending rank order
pub fn assignable_roles(manager: Role) -> Vec<Role> {
    Role::KNOWN
        .iter()
        .copied()
        .filter(|target| can_manage_role(manager, *target))
        .collect()
}

/// Fail with an authorization error unless `manager` can manage `target`
pub fn validate_role_hierarchy(manager: Role, target: Role) -> Result<()> {
    if !can_manage_role(manager, target) {
        return Err(AccessError::authorization(format!(
            "insufficient privileges to manage role {}",
            target
        )));
    }
    Ok(())
}

/// Whether a string names a recognized role
pub fn is_valid_role(role: &str) -> bool {
    role.parse::<Role>().is_ok()
}

/// Strictly parse an inbound role string
pub fn parse_role(role: &str) -> Result<Role> {
    role.parse::<Role>().map_err(|_| AccessError::invalid_role(role))
}
