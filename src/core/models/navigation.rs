//! Navigation menu descriptors

use crate::auth::rbac::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A navigation entry, optionally restricted to a set of roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Route path
    pub path: String,
    /// Menu label
    #[serde(default)]
    pub label: String,
    /// Roles allowed to see the entry; empty means everyone
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub required_roles: HashSet<Role>,
}

impl NavigationItem {
    /// Create an unrestricted entry
    pub fn new<P: Into<String>, L: Into<String>>(path: P, label: L) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            required_roles: HashSet::new(),
        }
    }

    /// Restrict the entry to the given roles
    pub fn restricted_to<I: IntoIterator<Item = Role>>(mut self, roles: I) -> Self {
        self.required_roles = roles.into_iter().collect();
        self
    }

    /// Whether a principal with `role` sees this entry
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.required_roles.is_empty() || self.required_roles.contains(&role)
    }
}
