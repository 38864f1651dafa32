//! Per-role PIN configuration and the unlock check.

use intake_core::access::{pin_matches, Grant, Role};
use intake_core::error::CoreError;

/// Fallback reviewer PIN when `REVIEWER_PIN` is unset.
pub const DEFAULT_REVIEWER_PIN: &str = "2468";
/// Fallback manager PIN when `MANAGER_PIN` is unset.
pub const DEFAULT_MANAGER_PIN: &str = "1234";
/// Fallback reviewer display name.
pub const DEFAULT_REVIEWER_NAME: &str = "Rishi";
/// Fallback manager display name.
pub const DEFAULT_MANAGER_NAME: &str = "Ruben";

/// Secret and display name for one role.
#[derive(Clone)]
pub struct RoleAccess {
    pub pin: String,
    pub actor: String,
}

impl std::fmt::Debug for RoleAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleAccess")
            .field("pin", &"<redacted>")
            .field("actor", &self.actor)
            .finish()
    }
}

/// PINs and display names for every staff role.
#[derive(Debug, Clone)]
pub struct AccessConfig {
    pub reviewer: RoleAccess,
    pub manager: RoleAccess,
}

impl AccessConfig {
    /// Load access configuration from environment variables.
    ///
    /// | Env Var         | Default  |
    /// |-----------------|----------|
    /// | `REVIEWER_PIN`  | `2468`   |
    /// | `REVIEWER_NAME` | `Rishi`  |
    /// | `MANAGER_PIN`   | `1234`   |
    /// | `MANAGER_NAME`  | `Ruben`  |
    ///
    /// Empty values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            reviewer: RoleAccess {
                pin: env_or("REVIEWER_PIN", DEFAULT_REVIEWER_PIN),
                actor: env_or("REVIEWER_NAME", DEFAULT_REVIEWER_NAME),
            },
            manager: RoleAccess {
                pin: env_or("MANAGER_PIN", DEFAULT_MANAGER_PIN),
                actor: env_or("MANAGER_NAME", DEFAULT_MANAGER_NAME),
            },
        }
    }

    pub fn for_role(&self, role: Role) -> &RoleAccess {
        match role {
            Role::Reviewer => &self.reviewer,
            Role::Manager => &self.manager,
        }
    }

    /// Compare an entered PIN with the one configured for `role`.
    ///
    /// Returns the grant to embed in a token, or `Unauthorized` on mismatch.
    pub fn unlock(&self, role: Role, entered_pin: &str) -> Result<Grant, CoreError> {
        let access = self.for_role(role);
        if pin_matches(entered_pin, &access.pin) {
            Ok(Grant::new(role, access.actor.clone()))
        } else {
            Err(CoreError::Unauthorized("Invalid PIN".into()))
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            reviewer: RoleAccess {
                pin: DEFAULT_REVIEWER_PIN.to_string(),
                actor: DEFAULT_REVIEWER_NAME.to_string(),
            },
            manager: RoleAccess {
                pin: DEFAULT_MANAGER_PIN.to_string(),
                actor: DEFAULT_MANAGER_NAME.to_string(),
            },
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
