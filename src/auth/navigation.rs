//! Role-based navigation filtering

use crate::auth::rbac::Role;
use crate::core::models::NavigationItem;

/// Lazily filter navigation items down to those visible to `role`
///
/// Input order is preserved. Items without a role restriction are always kept.
pub fn filter_navigation_items<'a, I>(
    items: I,
    role: Role,
) -> impl Iterator<Item = &'a NavigationItem> + 'a
where
    I: IntoIterator<Item = &'a NavigationItem>,
    I::IntoIter: 'a,
{
    items.into_iter().filter(move |item| item.is_visible_to(role))
}

/// Owned copy of the items visible to `role`
pub fn visible_navigation(items: &[NavigationItem], role: Role) -> Vec<NavigationItem> {
    filter_navigation_items(items, role).cloned().collect()
}
