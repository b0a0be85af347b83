//! Role, permission and route-guard decisions through the public API

use crate::common::{ALL_ROLES, PrincipalFactory};
use tenant_access::auth::rbac::{
    can_manage_role, get_role_permissions, has_permission, is_global_role, is_tenant_role,
};
use tenant_access::{
    AccessEngine, AdminSurface, Capability, DenialReason, Permission, PrincipalContext, Role,
};

#[test]
fn test_permission_scenarios() {
    assert!(has_permission(Role::TenantMarketer, Permission::CampaignsCreate));
    assert!(!has_permission(Role::TenantMarketer, Permission::TenantDeleteUsers));
    assert!(has_permission(Role::TenantAdmin, Permission::TenantDeleteUsers));
    assert!(!has_permission(Role::TenantAnalyst, Permission::TenantDeleteUsers));
}

#[test]
fn test_management_scenarios() {
    assert!(can_manage_role(Role::TenantAdmin, Role::TenantMarketer));
    assert!(!can_manage_role(Role::TenantMarketer, Role::TenantAdmin));

    for role in ALL_ROLES {
        assert!(!can_manage_role(role, role));
        assert!(!(is_global_role(role) && is_tenant_role(role)));
    }
}

#[test]
fn test_has_permission_agrees_with_permission_set() {
    for role in ALL_ROLES {
        for permission in Permission::ALL {
            assert_eq!(
                has_permission(role, permission),
                get_role_permissions(role).contains(&permission)
            );
        }
    }
}

#[test]
fn test_stale_role_string_fails_closed() {
    let principal = PrincipalFactory::stale("campaign_wizard");
    assert_eq!(principal.role, Role::Unknown);

    let engine = AccessEngine::default();
    assert!(engine.get_role_permissions(principal.role).is_empty());

    let decision = engine.authorize(
        &principal,
        &Capability::Permission(Permission::CampaignsRead),
    );
    assert!(!decision.allowed);
    assert_eq!(decision.reason, Some(DenialReason::UnrecognizedRole));
}

#[test]
fn test_route_guards() {
    let engine = AccessEngine::default();
    let super_console = Capability::Surface(AdminSurface::SuperAdminConsole);
    let tenant_console = Capability::Surface(AdminSurface::TenantAdminConsole);

    assert!(engine.authorize(&PrincipalFactory::superadmin(), &super_console).allowed);
    assert!(!engine.authorize(&PrincipalFactory::tenant_admin("acme"), &super_console).allowed);

    assert!(engine.authorize(&PrincipalFactory::tenant_admin("acme"), &tenant_console).allowed);
    assert!(!engine.authorize(&PrincipalFactory::marketer("acme"), &tenant_console).allowed);
    assert!(!engine.authorize(&PrincipalFactory::plain_user(), &tenant_console).allowed);
}

#[test]
fn test_tenant_scoped_permission() {
    let engine = AccessEngine::default();
    let read_invoices = |tenant: &str| Capability::TenantPermission {
        permission: Permission::BillingReadInvoices,
        tenant_id: tenant.to_string(),
    };

    let analyst = PrincipalFactory::analyst("acme");
    assert!(engine.authorize(&analyst, &read_invoices("acme")).allowed);

    let decision = engine.authorize(&analyst, &read_invoices("globex"));
    assert_eq!(decision.reason, Some(DenialReason::TenantMismatch));

    let decision = engine.authorize(&PrincipalFactory::marketer("acme"), &read_invoices("acme"));
    assert_eq!(decision.reason, Some(DenialReason::InsufficientPermissions));
    assert_eq!(
        decision.reason.map(|r| r.to_string()),
        Some("Insufficient permissions".to_string())
    );
}

#[test]
fn test_decision_serializes_for_clients() {
    let engine = AccessEngine::default();
    let decision = engine.authorize(
        &PrincipalContext::new(Role::User),
        &Capability::ManageRole {
            target_role: Role::TenantAnalyst,
        },
    );

    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["allowed"], false);
    assert_eq!(json["reason"]["kind"], "insufficient_rank");
    assert_eq!(json["reason"]["target_role"], "tenant_analyst");

    let granted = engine.authorize(
        &PrincipalFactory::superadmin(),
        &Capability::Permission(Permission::PlatformCreateTenant),
    );
    assert_eq!(serde_json::to_string(&granted).unwrap(), r#"{"allowed":true}"#);
}

#[test]
fn test_repeated_calls_are_identical() {
    let engine = AccessEngine::default();
    let principal = PrincipalFactory::marketer("acme");
    let capability = Capability::AllPermissions(vec![
        Permission::CampaignsLaunch,
        Permission::BudgetsAllocate,
    ]);

    let first = engine.authorize(&principal, &capability);
    for _ in 0..10 {
        assert_eq!(engine.authorize(&principal, &capability), first);
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let engine = AccessEngine::default();

    let handles: Vec<_> = ALL_ROLES
        .iter()
        .map(|role| {
            let engine = engine.clone();
            let role = *role;
            std::thread::spawn(move || {
                Permission::ALL
                    .iter()
                    .filter(|p| engine.has_permission(role, **p))
                    .count()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![6, 29, 16, 10, 0, 0]);
}
