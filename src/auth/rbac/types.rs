//! RBAC type definitions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Role assigned to a principal
///
/// Unrecognized role strings deserialize to [`Role::Unknown`], which holds no
/// permissions and no hierarchy rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator, not bound to a tenant
    #[serde(rename = "superadmin")]
    SuperAdmin,
    /// Tenant administrator
    TenantAdmin,
    /// Tenant marketer
    TenantMarketer,
    /// Tenant analyst
    TenantAnalyst,
    /// Unprivileged user
    User,
    /// Any value not listed above
    #[serde(other)]
    Unknown,
}

impl Role {
    /// All recognized roles in ascending hierarchy order
    pub const KNOWN: [Role; 5] = [
        Role::User,
        Role::TenantAnalyst,
        Role::TenantMarketer,
        Role::TenantAdmin,
        Role::SuperAdmin,
    ];

    /// Parse a role, mapping anything unrecognized to [`Role::Unknown`]
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or(Role::Unknown)
    }

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "superadmin",
            Role::TenantAdmin => "tenant_admin",
            Role::TenantMarketer => "tenant_marketer",
            Role::TenantAnalyst => "tenant_analyst",
            Role::User => "user",
            Role::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Unknown)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Role::SuperAdmin),
            "tenant_admin" => Ok(Role::TenantAdmin),
            "tenant_marketer" => Ok(Role::TenantMarketer),
            "tenant_analyst" => Ok(Role::TenantAnalyst),
            "user" => Ok(Role::User),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Display grouping for permissions
///
/// Categories carry no authorization meaning; decisions operate on the flat set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    Platform,
    Tenant,
    Campaigns,
    Creatives,
    Budgets,
    Analytics,
    Billing,
    Unknown,
}

impl PermissionCategory {
    /// Heading shown above the category in permission listings
    pub fn label(&self) -> &'static str {
        match self {
            PermissionCategory::Platform => "Platform Management",
            PermissionCategory::Tenant => "Tenant Management",
            PermissionCategory::Campaigns => "Campaign Management",
            PermissionCategory::Creatives => "Creative Management",
            PermissionCategory::Budgets => "Budget Management",
            PermissionCategory::Analytics => "Analytics & Reporting",
            PermissionCategory::Billing => "Billing",
            PermissionCategory::Unknown => "Other",
        }
    }
}

/// Namespaced capability token, e.g. `campaigns:create`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    // Platform management
    PlatformReadAllTenants,
    PlatformCreateTenant,
    PlatformDeleteTenant,
    PlatformManageGlobalSettings,
    PlatformViewGlobalAnalytics,
    PlatformManageGlobalBilling,

    // Tenant management
    TenantReadUsers,
    TenantCreateUsers,
    TenantUpdateUsers,
    TenantDeleteUsers,
    TenantManageRoles,
    TenantViewSettings,
    TenantUpdateSettings,

    // Campaign management
    CampaignsRead,
    CampaignsCreate,
    CampaignsUpdate,
    CampaignsDelete,
    CampaignsLaunch,
    CampaignsPause,

    // Creative management
    CreativesRead,
    CreativesCreate,
    CreativesUpdate,
    CreativesDelete,
    CreativesGenerateAi,

    // Budget management
    BudgetsRead,
    BudgetsUpdate,
    BudgetsAllocate,

    // Analytics & reporting
    AnalyticsReadCampaignData,
    AnalyticsReadPerformanceData,
    AnalyticsExportReports,
    AnalyticsCreateCustomReports,

    // Billing
    BillingReadInvoices,
    BillingExportInvoices,
    BillingViewUsageData,
    BillingGenerateBillingReports,

    /// Any token not listed above; never granted
    Unknown,
}

impl Permission {
    /// Every recognized permission, grouped by category
    pub const ALL: [Permission; 35] = [
        Permission::PlatformReadAllTenants,
        Permission::PlatformCreateTenant,
        Permission::PlatformDeleteTenant,
        Permission::PlatformManageGlobalSettings,
        Permission::PlatformViewGlobalAnalytics,
        Permission::PlatformManageGlobalBilling,
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

    /// Parse a permission token, mapping anything unrecognized to [`Permission::Unknown`]
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or(Permission::Unknown)
    }

    /// Wire token of the permission
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::PlatformReadAllTenants => "platform:read_all_tenants",
            Permission::PlatformCreateTenant => "platform:create_tenant",
            Permission::PlatformDeleteTenant => "platform:delete_tenant",
            Permission::PlatformManageGlobalSettings => "platform:manage_global_settings",
            Permission::PlatformViewGlobalAnalytics => "platform:view_global_analytics",
            Permission::PlatformManageGlobalBilling => "platform:manage_global_billing",
            Permission::TenantReadUsers => "tenant:read_users",
            Permission::TenantCreateUsers => "tenant:create_users",
            Permission::TenantUpdateUsers => "tenant:update_users",
            Permission::TenantDeleteUsers => "tenant:delete_users",
            Permission::TenantManageRoles => "tenant:manage_roles",
            Permission::TenantViewSettings => "tenant:view_tenant_settings",
            Permission::TenantUpdateSettings => "tenant:update_tenant_settings",
            Permission::CampaignsRead => "campaigns:read",
            Permission::CampaignsCreate => "campaigns:create",
            Permission::CampaignsUpdate => "campaigns:update",
            Permission::CampaignsDelete => "campaigns:delete",
            Permission::CampaignsLaunch => "campaigns:launch",
            Permission::CampaignsPause => "campaigns:pause",
            Permission::CreativesRead => "creatives:read",
            Permission::CreativesCreate => "creatives:create",
            Permission::CreativesUpdate => "creatives:update",
            Permission::CreativesDelete => "creatives:delete",
            Permission::CreativesGenerateAi => "creatives:generate_ai",
            Permission::BudgetsRead => "budgets:read",
            Permission::BudgetsUpdate => "budgets:update",
            Permission::BudgetsAllocate => "budgets:allocate",
            Permission::AnalyticsReadCampaignData => "analytics:read_campaign_data",
            Permission::AnalyticsReadPerformanceData => "analytics:read_performance_data",
            Permission::AnalyticsExportReports => "analytics:export_reports",
            Permission::AnalyticsCreateCustomReports => "analytics:create_custom_reports",
            Permission::BillingReadInvoices => "billing:read_invoices",
            Permission::BillingExportInvoices => "billing:export_invoices",
            Permission::BillingViewUsageData => "billing:view_usage_data",
            Permission::BillingGenerateBillingReports => "billing:generate_billing_reports",
            Permission::Unknown => "unknown",
        }
    }

    /// Display category, derived from the token namespace
    pub fn category(&self) -> PermissionCategory {
        let namespace = self.as_str().split(':').next().unwrap_or_default();
        match namespace {
            "platform" => PermissionCategory::Platform,
            "tenant" => PermissionCategory::Tenant,
            "campaigns" => PermissionCategory::Campaigns,
            "creatives" => PermissionCategory::Creatives,
            "budgets" => PermissionCategory::Budgets,
            "analytics" => PermissionCategory::Analytics,
            "billing" => PermissionCategory::Billing,
            _ => PermissionCategory::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Permission::Unknown)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Invalid permission: {}", s))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Permission::parse(&token))
    }
}
