//! Security-aware logging utilities

use crate::auth::types::{Capability, Decision};
use crate::core::models::PrincipalContext;
use tracing::{debug, info, warn};

/// Structured authorization events on the `security` target
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log an authorization decision
    ///
    /// Denials go out at WARN when `log_denials` is set; everything else is
    /// emitted only when `log_decisions` is set.
    pub fn log_authz_event(
        principal: &PrincipalContext,
        capability: &Capability,
        decision: &Decision,
        log_decisions: bool,
        log_denials: bool,
    ) {
        let tenant_id = principal.tenant_id.as_deref().unwrap_or("-");
        let user_id = principal.user_id.as_deref().unwrap_or("-");

        match &decision.reason {
            Some(reason) if log_denials => warn!(
                target: "security",
                role = %principal.role,
                tenant_id,
                user_id,
                capability = %capability,
                reason = %reason,
                "Authorization denied"
            ),
            Some(reason) if log_decisions => info!(
                target: "security",
                role = %principal.role,
                tenant_id,
                user_id,
                capability = %capability,
                reason = %reason,
                "Authorization denied"
            ),
            None if log_decisions => debug!(
                target: "security",
                role = %principal.role,
                tenant_id,
                user_id,
                capability = %capability,
                "Authorization granted"
            ),
            _ => {}
        }
    }
}
