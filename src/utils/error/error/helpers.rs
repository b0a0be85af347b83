//! Helper functions for creating specific error types

use super::types::AccessError;

/// Helper functions for creating specific errors
impl AccessError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_role<S: Into<String>>(role: S) -> Self {
        Self::InvalidRole(role.into())
    }

    pub fn invalid_permission<S: Into<String>>(permission: S) -> Self {
        Self::InvalidPermission(permission.into())
    }

    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::Authorization(message.into())
    }

    /// Whether the error came from a denied hierarchy or permission check
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization(_))
    }
}
