//! Team management rules: hierarchy, self-service and role assignment

use crate::common::{MemberFactory, PrincipalFactory};
use tenant_access::config::AccessConfig;
use tenant_access::{AccessEngine, AccessError, Capability, Role};

#[test]
fn test_admin_manages_lower_roles_in_own_tenant() {
    let engine = AccessEngine::default();
    let admin = PrincipalFactory::tenant_admin("acme");

    for role in [Role::TenantMarketer, Role::TenantAnalyst, Role::User] {
        let member = MemberFactory::member("someone", "acme", role);
        assert!(engine.can_manage_member(&admin, &member), "{}", role);
    }

    let peer = MemberFactory::member("bob", "acme", Role::TenantAdmin);
    assert!(!engine.can_manage_member(&admin, &peer));
}

#[test]
fn test_admin_cannot_reach_other_tenant() {
    let engine = AccessEngine::default();
    let admin = PrincipalFactory::tenant_admin("acme");
    let foreign = MemberFactory::member("max", "globex", Role::TenantAnalyst);

    assert!(!engine.can_manage_member(&admin, &foreign));
    assert!(engine.can_manage_member(&PrincipalFactory::superadmin(), &foreign));
}

#[test]
fn test_self_edit_is_separate_from_hierarchy() {
    let engine = AccessEngine::default();
    let marketer = PrincipalFactory::marketer("acme");
    let own_row = MemberFactory::member("mia", "acme", Role::TenantMarketer);

    assert!(!engine.can_manage_role(marketer.role, own_row.role));
    assert!(engine.can_manage_member(&marketer, &own_row));

    let strict = AccessEngine::new(AccessConfig {
        allow_self_service: false,
        ..AccessConfig::default()
    });
    assert!(!strict.can_manage_member(&marketer, &own_row));
}

#[test]
fn test_stale_role_cannot_edit_own_row() {
    let engine = AccessEngine::default();
    let stale = PrincipalFactory::stale("owner").with_user("ada");
    let own_row = MemberFactory::member("ada", "acme", Role::TenantAdmin);

    let decision = engine.authorize(
        &stale,
        &Capability::ManageRole {
            target_role: own_row.role,
        },
    );
    assert!(!decision.allowed);
    assert!(!engine.can_manage_member(&stale, &own_row));
}

#[test]
fn test_self_edit_limited_to_current_tenant() {
    let engine = AccessEngine::default();
    let marketer = PrincipalFactory::marketer("acme");
    let row_elsewhere = MemberFactory::member("mia", "globex", Role::TenantMarketer);

    assert!(!engine.can_manage_member(&marketer, &row_elsewhere));
}

#[test]
fn test_assignable_roles_for_invite_dialog() {
    let engine = AccessEngine::default();
    assert_eq!(
        engine.assignable_roles(Role::TenantAdmin),
        vec![Role::User, Role::TenantAnalyst, Role::TenantMarketer]
    );
    assert_eq!(
        engine.assignable_roles(Role::TenantAnalyst),
        vec![Role::User]
    );
}

#[test]
fn test_role_assignment_validation() {
    let engine = AccessEngine::default();
    let admin = PrincipalFactory::tenant_admin("acme");

    assert!(
        engine
            .validate_role_assignment(&admin, Role::TenantMarketer)
            .is_ok()
    );

    match engine.validate_role_assignment(&admin, Role::TenantAdmin) {
        Err(AccessError::Authorization(msg)) => {
            assert_eq!(msg, "insufficient privileges to manage role tenant_admin")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_inbound_role_strings() {
    use tenant_access::auth::rbac::{is_valid_role, parse_role};

    assert!(is_valid_role("tenant_marketer"));
    assert!(!is_valid_role("marketer"));
    assert!(matches!(parse_role("marketer"), Err(AccessError::InvalidRole(r)) if r == "marketer"));
    assert_eq!(parse_role("superadmin").unwrap(), Role::SuperAdmin);
}
