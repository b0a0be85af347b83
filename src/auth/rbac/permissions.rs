//! Role to permission table and permission checks

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::types::{Permission, Role};

const SUPER_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::PlatformReadAllTenants,
    Permission::PlatformCreateTenant,
    Permission::PlatformDeleteTenant,
    Permission::PlatformManageGlobalSettings,
    Permission::PlatformViewGlobalAnalytics,
    Permission::PlatformManageGlobalBilling,
];

const TENANT_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::TenantReadUsers,
    Permission::TenantCreateUsers,
    Permission::TenantUpdateUsers,
    Permission::TenantDeleteUsers,
    Permission::TenantManageRoles,
    Permission::TenantViewSettings,
    Permission::TenantUpdateSettings,
    Permission::CampaignsRead,
    Permission::CampaignsCreate,
    Permission::CampaignsUpdate,
    Permission::CampaignsDelete,
    Permission::CampaignsLaunch,
    Permission::CampaignsPause,
    Permission::CreativesRead,
    Permission::CreativesCreate,
    Permission::CreativesUpdate,
    Permission::CreativesDelete,
    Permission::CreativesGenerateAi,
    Permission::BudgetsRead,
    Permission::BudgetsUpdate,
    Permission::BudgetsAllocate,
    Permission::AnalyticsReadCampaignData,
    Permission::AnalyticsReadPerformanceData,
    Permission::AnalyticsExportReports,
    Permission::AnalyticsCreateCustomReports,
    Permission::BillingReadInvoices,
    Permission::BillingExportInvoices,
    Permission::BillingViewUsageData,
    Permission::BillingGenerateBillingReports,
];

const TENANT_MARKETER_PERMISSIONS: &[Permission] = &[
    Permission::CampaignsRead,
    Permission::CampaignsCreate,
    Permission::CampaignsUpdate,
    Permission::CampaignsDelete,
    Permission::CampaignsLaunch,
    Permission::CampaignsPause,
    Permission::CreativesRead,
    Permission::CreativesCreate,
    Permission::CreativesUpdate,
    Permission::CreativesDelete,
    Permission::CreativesGenerateAi,
    Permission::BudgetsRead,
    Permission::BudgetsUpdate,
    Permission::BudgetsAllocate,
    Permission::AnalyticsReadCampaignData,
    Permission::AnalyticsReadPerformanceData,
];

const TENANT_ANALYST_PERMISSIONS: &[Permission] = &[
    Permission::CampaignsRead,
    Permission::CreativesRead,
    Permission::AnalyticsReadCampaignData,
    Permission::AnalyticsReadPerformanceData,
    Permission::AnalyticsExportReports,
    Permission::AnalyticsCreateCustomReports,
    Permission::BillingReadInvoices,
    Permission::BillingExportInvoices,
    Permission::BillingViewUsageData,
    Permission::BillingGenerateBillingReports,
];

/// Permissions granted to a role, as declared
///
/// Total over [`Role`]: `User` and `Unknown` grant nothing.
pub fn role_permission_list(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN_PERMISSIONS,
        Role::TenantAdmin => TENANT_ADMIN_PERMISSIONS,
        Role::TenantMarketer => TENANT_MARKETER_PERMISSIONS,
        Role::TenantAnalyst => TENANT_ANALYST_PERMISSIONS,
        Role::User | Role::Unknown => &[],
    }
}

static ROLE_PERMISSION_TABLE: Lazy<HashMap<Role, HashSet<Permission>>> = Lazy::new(|| {
    let table: HashMap<Role, HashSet<Permission>> = Role::KNOWN
        .iter()
        .map(|role| (*role, role_permission_list(*role).iter().copied().collect()))
        .collect();
    debug!("Initialized role permission table with {} roles", table.len());
    table
});

static NO_PERMISSIONS: Lazy<HashSet<Permission>> = Lazy::new(HashSet::new);

/// Get the permission set granted to a role
///
/// Never fails: a role without an entry yields the empty set.
pub fn get_role_permissions(role: Role) -> &'static HashSet<Permission> {
    ROLE_PERMISSION_TABLE.get(&role).unwrap_or(&NO_PERMISSIONS)
}

/// Check whether a role holds a permission
pub fn has_permission(role: Role, permission: Permission) -> bool {
    get_role_permissions(role).contains(&permission)
}

/// Check whether a role holds every listed permission
pub fn has_all_permissions(role: Role, required: &[Permission]) -> bool {
    let granted = get_role_permissions(role);
    required.iter().all(|p| granted.contains(p))
}

/// Check whether a role holds at least one listed permission
pub fn has_any_permission(role: Role, required: &[Permission]) -> bool {
    let granted = get_role_permissions(role);
    required.iter().any(|p| granted.contains(p))
}

/// Permissions from `required` the role does not hold, in input order
pub fn missing_permissions(role: Role, required: &[Permission]) -> Vec<Permission> {
    let granted = get_role_permissions(role);
    required
        .iter()
        .filter(|p| !granted.contains(p))
        .copied()
        .collect()
}

/// Sorted permission tokens for a role, the form persisted on team member records
pub fn permission_tokens(role: Role) -> Vec<&'static str> {
    let mut tokens: Vec<&'static str> = get_role_permissions(role)
        .iter()
        .map(Permission::as_str)
        .collect();
    tokens.sort_unstable();
    tokens
}

/// Whether a string names a recognized permission
pub fn is_valid_permission(permission: &str) -> bool {
    permission.parse::<Permission>().is_ok()
}
