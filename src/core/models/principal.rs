//! Principal context supplied by the identity provider

use crate::auth::rbac::Role;
use serde::{Deserialize, Serialize};

/// The currently authenticated actor
///
/// Produced by the session layer and treated as opaque input. A tenant role
/// without a tenant id is not rejected here; tenant-scoped checks simply fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalContext {
    /// Assigned role, `Unknown` when the session carries none
    #[serde(default = "unrecognized_role")]
    pub role: Role,
    /// Tenant the principal belongs to, absent for platform roles
    #[serde(default, alias = "tenantId", skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Stable user identifier, used to recognize self-service edits
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

fn unrecognized_role() -> Role {
    Role::Unknown
}

impl PrincipalContext {
    /// Create a context for a role with no tenant
    pub fn new(role: Role) -> Self {
        Self {
            role,
            tenant_id: None,
            user_id: None,
        }
    }

    /// Set tenant ID
    pub fn with_tenant<S: Into<String>>(mut self, tenant_id: S) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Set user ID
    pub fn with_user<S: Into<String>>(mut self, user_id: S) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Whether the principal belongs to the given tenant
    pub fn belongs_to(&self, tenant_id: &str) -> bool {
        self.tenant_id.as_deref() == Some(tenant_id)
    }

    /// Whether the principal and `user_id` refer to the same user
    pub fn is_user(&self, user_id: Option<&str>) -> bool {
        matches!((self.user_id.as_deref(), user_id), (Some(a), Some(b)) if a == b)
    }
}

impl From<Role> for PrincipalContext {
    fn from(role: Role) -> Self {
        Self::new(role)
    }
}

/// A row in the tenant's team list, as far as management decisions need it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberRef {
    /// User ID of the member
    pub user_id: String,
    /// Tenant the member belongs to
    pub tenant_id: String,
    /// Member role
    pub role: Role,
}

impl TeamMemberRef {
    pub fn new<U: Into<String>, T: Into<String>>(user_id: U, tenant_id: T, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            tenant_id: tenant_id.into(),
            role,
        }
    }
}
