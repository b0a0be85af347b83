//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use tenant_access::{NavigationItem, PrincipalContext, Role, TeamMemberRef};

/// Every role variant, the catch-all included
pub const ALL_ROLES: [Role; 6] = [
    Role::SuperAdmin,
    Role::TenantAdmin,
    Role::TenantMarketer,
    Role::TenantAnalyst,
    Role::User,
    Role::Unknown,
];

/// Factory for creating principal contexts
pub struct PrincipalFactory;

impl PrincipalFactory {
    pub fn superadmin() -> PrincipalContext {
        PrincipalContext::new(Role::SuperAdmin).with_user("root")
    }

    pub fn tenant_admin(tenant: &str) -> PrincipalContext {
        Self::in_tenant(Role::TenantAdmin, tenant, "ada")
    }

    pub fn marketer(tenant: &str) -> PrincipalContext {
        Self::in_tenant(Role::TenantMarketer, tenant, "mia")
    }

    pub fn analyst(tenant: &str) -> PrincipalContext {
        Self::in_tenant(Role::TenantAnalyst, tenant, "ann")
    }

    pub fn plain_user() -> PrincipalContext {
        PrincipalContext::new(Role::User).with_user("guest")
    }

    /// A principal whose session carries a role string we do not know
    pub fn stale(role: &str) -> PrincipalContext {
        let json = format!(r#"{{"role": "{}", "tenantId": "acme"}}"#, role);
        serde_json::from_str(&json).expect("principal json")
    }

    pub fn in_tenant(role: Role, tenant: &str, user: &str) -> PrincipalContext {
        PrincipalContext::new(role).with_tenant(tenant).with_user(user)
    }
}

/// Factory for team member rows
pub struct MemberFactory;

impl MemberFactory {
    pub fn member(user: &str, tenant: &str, role: Role) -> TeamMemberRef {
        TeamMemberRef::new(user, tenant, role)
    }
}

/// The `/team` + `/dashboard` menu used by the navigation scenarios
pub fn sample_menu() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("/team", "Team").restricted_to([Role::TenantAdmin, Role::SuperAdmin]),
        NavigationItem::new("/dashboard", "Dashboard"),
    ]
}
