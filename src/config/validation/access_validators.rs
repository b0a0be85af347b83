//! Access configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::Role;
use crate::config::models::{AccessConfig, LoggingConfig};
use std::collections::HashSet;
use tracing::warn;

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();

        for item in &self.navigation {
            if item.path.is_empty() {
                return Err("Navigation item path cannot be empty".to_string());
            }

            if !item.path.starts_with('/') {
                return Err(format!(
                    "Navigation item path must start with '/': {}",
                    item.path
                ));
            }

            if !seen.insert(item.path.as_str()) {
                return Err(format!("Duplicate navigation path: {}", item.path));
            }

            if item.required_roles.contains(&Role::Unknown) {
                return Err(format!(
                    "Navigation item {} references an unrecognized role",
                    item.path
                ));
            }
        }

        if !self.log_denials && !self.log_decisions {
            warn!("Authorization decision logging is fully disabled");
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level: {}. Valid levels: {}",
                self.level,
                LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
