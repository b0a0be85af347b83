//! Authorization request and decision types

use crate::auth::rbac::{Permission, Role};
use serde::Serialize;
use std::fmt;

/// Restricted consoles gated by a role check instead of a permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminSurface {
    /// Platform console, superadmin only
    SuperAdminConsole,
    /// Tenant administration console, tenant admins only
    TenantAdminConsole,
}

impl AdminSurface {
    /// The single role admitted to the surface
    pub fn required_role(&self) -> Role {
        match self {
            AdminSurface::SuperAdminConsole => Role::SuperAdmin,
            AdminSurface::TenantAdminConsole => Role::TenantAdmin,
        }
    }
}

/// What the caller wants to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// Hold a single permission
    Permission(Permission),
    /// Hold every listed permission
    AllPermissions(Vec<Permission>),
    /// Hold at least one listed permission
    AnyPermission(Vec<Permission>),
    /// Hold a permission inside a specific tenant
    TenantPermission {
        permission: Permission,
        tenant_id: String,
    },
    /// Open a restricted console
    Surface(AdminSurface),
    /// Edit, remove or promote a member holding `target_role`
    ManageRole { target_role: Role },
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Permission(p) => write!(f, "{}", p),
            Capability::AllPermissions(ps) => write!(f, "all of {}", join(ps)),
            Capability::AnyPermission(ps) => write!(f, "any of {}", join(ps)),
            Capability::TenantPermission {
                permission,
                tenant_id,
            } => write!(f, "{} in tenant {}", permission, tenant_id),
            Capability::Surface(surface) => write!(f, "surface {:?}", surface),
            Capability::ManageRole { target_role } => write!(f, "manage role {}", target_role),
        }
    }
}

fn join(permissions: &[Permission]) -> String {
    permissions
        .iter()
        .map(Permission::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a request was denied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DenialReason {
    /// The principal's role is not recognized
    UnrecognizedRole,
    /// Permissions the role does not hold
    MissingPermissions { permissions: Vec<Permission> },
    /// The principal is not a member of the requested tenant
    TenantMismatch,
    /// The role has no tenant or platform scope
    InsufficientPermissions,
    /// The surface admits a different role
    RoleRequired { role: Role },
    /// The target role is not strictly below the principal's role
    InsufficientRank { target_role: Role },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::UnrecognizedRole => write!(f, "Unrecognized role"),
            DenialReason::MissingPermissions { permissions } => {
                write!(f, "Missing permission: {}", join(permissions))
            }
            DenialReason::TenantMismatch => write!(f, "User not member of specified tenant"),
            DenialReason::InsufficientPermissions => write!(f, "Insufficient permissions"),
            DenialReason::RoleRequired { role } => write!(f, "Requires role {}", role),
            DenialReason::InsufficientRank { target_role } => {
                write!(f, "Insufficient privileges to manage role {}", target_role)
            }
        }
    }
}

/// Advisory outcome of an authorization request
///
/// The backend re-checks every request; this only decides what to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Reason for denial (if not allowed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenialReason>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }
}
