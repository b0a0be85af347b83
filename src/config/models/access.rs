//! Access decision configuration

use super::*;
use crate::auth::rbac::Role;
use crate::core::models::NavigationItem;
use serde::{Deserialize, Serialize};

/// Access decision configuration
///
/// Role and permission tables are compiled in; only the surrounding behavior
/// is configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Log every authorization decision
    #[serde(default)]
    pub log_decisions: bool,
    /// Log denied decisions at WARN
    #[serde(default = "default_true")]
    pub log_denials: bool,
    /// Let members edit their own row regardless of the role hierarchy
    #[serde(default = "default_true")]
    pub allow_self_service: bool,
    /// Navigation menu, in display order
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavigationItem>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            log_decisions: false,
            log_denials: true,
            allow_self_service: true,
            navigation: default_navigation(),
        }
    }
}

impl AccessConfig {
    /// Merge access configurations, `other` wins where it differs from the defaults
    pub fn merge(mut self, other: Self) -> Self {
        if other.log_decisions {
            self.log_decisions = other.log_decisions;
        }
        if !other.log_denials {
            self.log_denials = other.log_denials;
        }
        if !other.allow_self_service {
            self.allow_self_service = other.allow_self_service;
        }
        if other.navigation != default_navigation() {
            self.navigation = other.navigation;
        }
        self
    }
}

/// Main menu of the marketing dashboard
pub fn default_navigation() -> Vec<NavigationItem> {
    let tenant_roles = [Role::TenantAdmin, Role::TenantMarketer, Role::TenantAnalyst];
    vec![
        NavigationItem::new("/dashboard", "Dashboard"),
        NavigationItem::new("/campaigns", "Campaigns").restricted_to(tenant_roles),
        NavigationItem::new("/creatives", "AI Creatives")
            .restricted_to([Role::TenantAdmin, Role::TenantMarketer]),
        NavigationItem::new("/analytics", "Analytics").restricted_to(tenant_roles),
        NavigationItem::new("/billing", "Billing")
            .restricted_to([Role::TenantAdmin, Role::TenantAnalyst]),
        NavigationItem::new("/team", "Team").restricted_to([Role::TenantAdmin, Role::SuperAdmin]),
        NavigationItem::new("/settings", "Settings"),
        NavigationItem::new("/admin", "Super Admin").restricted_to([Role::SuperAdmin]),
    ]
}
