//! Role-Based Access Control (RBAC) model
//!
//! Static role and permission tables with the pure queries built on them.
//! Every query is total: an unrecognized role or permission resolves to the
//! most restrictive answer instead of an error.

mod permissions;
mod roles;
mod types;

// Re-export public types and functions
pub use permissions::{
    get_role_permissions, has_all_permissions, has_any_permission, has_permission,
    is_valid_permission, missing_permissions, permission_tokens, role_permission_list,
};
pub use roles::{
    assignable_roles, can_manage_role, is_global_role, is_tenant_role, is_valid_role,
    parse_role, validate_role_hierarchy,
};
pub use types::{Permission, PermissionCategory, Role};
