//! Staff roles and the grants that prove a role was unlocked.
//!
//! Each role is unlocked by entering a shared PIN. A successful unlock yields
//! a [`Grant`], which workflow operations require instead of reading any
//! ambient session state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::CoreError;

pub const ROLE_REVIEWER: &str = "reviewer";
pub const ROLE_MANAGER: &str = "manager";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Triages submissions and attaches estimates.
    Reviewer,
    /// Approves, denies, or holds tickets.
    Manager,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Reviewer => ROLE_REVIEWER,
            Role::Manager => ROLE_MANAGER,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_REVIEWER => Ok(Role::Reviewer),
            ROLE_MANAGER => Ok(Role::Manager),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {ROLE_REVIEWER}, {ROLE_MANAGER}"
            ))),
        }
    }
}

/// An unlocked role together with the name recorded on the actions it takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub role: Role,
    pub actor: String,
}

impl Grant {
    pub fn new(role: Role, actor: impl Into<String>) -> Self {
        Self {
            role,
            actor: actor.into(),
        }
    }

    /// Fail with `Forbidden` unless this grant is for `role`.
    pub fn require(&self, role: Role) -> Result<(), CoreError> {
        if self.role == role {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "The {role} role is required for this action"
            )))
        }
    }
}

/// Compare an entered PIN against the configured one.
///
/// Both sides are hashed first so the constant-time comparison always walks
/// 32 bytes, whatever the PIN lengths.
pub fn pin_matches(entered: &str, expected: &str) -> bool {
    let a = Sha256::digest(entered.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a.as_slice().ct_eq(b.as_slice()).into()
}
