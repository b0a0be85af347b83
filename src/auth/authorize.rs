//! Authorization decisions over a principal context
//!
//! A single entry point, [`authorize`], answers every route-guard and
//! action-button question the presentation layer asks.

use crate::auth::rbac::{
    Permission, can_manage_role, has_any_permission, has_permission, is_global_role,
    is_tenant_role, missing_permissions,
};
use crate::auth::types::{Capability, Decision, DenialReason};
use crate::core::models::{PrincipalContext, TeamMemberRef};

/// Decide whether `context` may exercise `capability`
///
/// Unrecognized roles are denied outright.
pub fn authorize(context: &PrincipalContext, capability: &Capability) -> Decision {
    let role = context.role;
    if !role.is_known() {
        return Decision::deny(DenialReason::UnrecognizedRole);
    }

    match capability {
        Capability::Permission(permission) => {
            if has_permission(role, *permission) {
                Decision::allow()
            } else {
                Decision::deny(DenialReason::MissingPermissions {
                    permissions: vec![*permission],
                })
            }
        }
        Capability::AllPermissions(required) => {
            let missing = missing_permissions(role, required);
            if missing.is_empty() {
                Decision::allow()
            } else {
                Decision::deny(DenialReason::MissingPermissions {
                    permissions: missing,
                })
            }
        }
        Capability::AnyPermission(required) => {
            if has_any_permission(role, required) {
                Decision::allow()
            } else {
                Decision::deny(DenialReason::MissingPermissions {
                    permissions: required.clone(),
                })
            }
        }
        Capability::TenantPermission {
            permission,
            tenant_id,
        } => check_tenant_permission(context, *permission, tenant_id),
        Capability::Surface(surface) => {
            let required = surface.required_role();
            if role == required {
                Decision::allow()
            } else {
                Decision::deny(DenialReason::RoleRequired { role: required })
            }
        }
        Capability::ManageRole { target_role } => {
            if can_manage_role(role, *target_role) {
                Decision::allow()
            } else {
                Decision::deny(DenialReason::InsufficientRank {
                    target_role: *target_role,
                })
            }
        }
    }
}

/// Tenant-scoped permission check
///
/// Platform roles are checked globally and the tenant is ignored. Tenant roles
/// must belong to `tenant_id` before their permissions count; a missing
/// principal tenant is a mismatch. Every other refusal, a lacking permission
/// included, reports insufficient permissions.
pub fn check_tenant_permission(
    context: &PrincipalContext,
    permission: Permission,
    tenant_id: &str,
) -> Decision {
    let role = context.role;
    if !role.is_known() {
        return Decision::deny(DenialReason::UnrecognizedRole);
    }

    if is_tenant_role(role) && !context.belongs_to(tenant_id) {
        return Decision::deny(DenialReason::TenantMismatch);
    }

    let in_scope = is_global_role(role) || is_tenant_role(role);
    if in_scope && has_permission(role, permission) {
        Decision::allow()
    } else {
        Decision::deny(DenialReason::InsufficientPermissions)
    }
}

/// Whether `manager` may act inside `tenant_id`
///
/// Platform roles reach every tenant; tenant roles only their own.
fn reaches_tenant(manager: &PrincipalContext, tenant_id: &str) -> bool {
    is_global_role(manager.role) || manager.belongs_to(tenant_id)
}

/// Whether `manager` outranks `member` within a tenant it can reach
pub fn outranks_member(manager: &PrincipalContext, member: &TeamMemberRef) -> bool {
    reaches_tenant(manager, &member.tenant_id) && can_manage_role(manager.role, member.role)
}

/// Whether `member` is the manager's own row in a tenant the manager acts in
///
/// Unrecognized roles never qualify.
pub fn is_own_row(manager: &PrincipalContext, member: &TeamMemberRef) -> bool {
    manager.role.is_known()
        && reaches_tenant(manager, &member.tenant_id)
        && manager.is_user(Some(&member.user_id))
}

/// Whether `manager` may edit `member`'s row
///
/// Self-service edits bypass the hierarchy; [`can_manage_role`] itself never
/// grants equal-rank management.
pub fn can_manage_member(manager: &PrincipalContext, member: &TeamMemberRef) -> bool {
    is_own_row(manager, member) || outranks_member(manager, member)
}
