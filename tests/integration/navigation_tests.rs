//! Navigation filtering through the public API

use crate::common::sample_menu;
use tenant_access::auth::filter_navigation_items;
use tenant_access::{AccessEngine, NavigationItem, Role};

#[test]
fn test_marketer_menu_scenario() {
    let menu = sample_menu();
    let visible: Vec<&NavigationItem> =
        filter_navigation_items(&menu, Role::TenantMarketer).collect();

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].path, "/dashboard");
}

#[test]
fn test_engine_filters_caller_menu() {
    let engine = AccessEngine::default();
    let menu = sample_menu();

    let paths: Vec<&str> = engine
        .filter_navigation_items(&menu, Role::SuperAdmin)
        .map(|item| item.path.as_str())
        .collect();
    assert_eq!(paths, vec!["/team", "/dashboard"]);
}

#[test]
fn test_default_menu_for_analyst() {
    let engine = AccessEngine::default();
    let paths: Vec<&str> = engine
        .navigation_for(Role::TenantAnalyst)
        .into_iter()
        .map(|item| item.path.as_str())
        .collect();

    assert_eq!(
        paths,
        vec!["/dashboard", "/campaigns", "/analytics", "/billing", "/settings"]
    );
}
