//! Ticket state machine.
//!
//! ```text
//! Submitted --triage--> Pending Manager Approval --decide--> Approved | Denied | On Hold
//! ```
//!
//! These functions only judge whether a transition is legal. Persisting the
//! result is the store's job, and the store itself writes unconditionally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::submission::non_blank;
use crate::ticket::TicketStatus;

/// How strictly manager decisions are checked against the current status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// A manager may decide a ticket in any status, including one that was
    /// never triaged.
    #[default]
    Permissive,
    /// A manager may only decide tickets awaiting approval, or re-decide one
    /// that already carries a decision.
    Guarded,
}

impl TransitionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionPolicy::Permissive => "permissive",
            TransitionPolicy::Guarded => "guarded",
        }
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "guarded" => Ok(TransitionPolicy::Guarded),
            other => Err(CoreError::Validation(format!(
                "Invalid transition policy '{other}'. Must be one of: permissive, guarded"
            ))),
        }
    }
}

/// A manager's verdict on a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approve,
    Deny,
    Hold,
}

impl Decision {
    /// The status a ticket lands in after this decision.
    pub fn target_status(self) -> TicketStatus {
        match self {
            Decision::Approve => TicketStatus::Approved,
            Decision::Deny => TicketStatus::Denied,
            Decision::Hold => TicketStatus::OnHold,
        }
    }
}

/// Check that a ticket in `current` status can be forwarded by triage.
///
/// Only `Submitted` tickets are triageable. `current` is the stored label,
/// which may be one this build does not recognise.
pub fn ensure_triageable(current: &str) -> Result<(), CoreError> {
    match current.parse::<TicketStatus>() {
        Ok(TicketStatus::Submitted) => Ok(()),
        _ => Err(CoreError::Conflict(format!(
            "Ticket is '{current}'; only '{}' tickets can be triaged",
            TicketStatus::Submitted
        ))),
    }
}

/// Check that a ticket in `current` status can receive a manager decision.
pub fn ensure_decidable(current: &str, policy: TransitionPolicy) -> Result<(), CoreError> {
    if policy == TransitionPolicy::Permissive {
        return Ok(());
    }
    match current.parse::<TicketStatus>() {
        Ok(status) if status == TicketStatus::PendingManagerApproval || status.is_decision() => {
            Ok(())
        }
        _ => Err(CoreError::Conflict(format!(
            "Ticket is '{current}'; a decision requires '{}' or an earlier decision",
            TicketStatus::PendingManagerApproval
        ))),
    }
}

/// A triage estimate ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// `None` means no estimate yet, which is distinct from zero hours.
    pub hours: Option<f64>,
    pub notes: Option<String>,
}

/// Validate estimate hours and normalize blank notes to `None`.
pub fn validate_estimate(hours: Option<f64>, notes: Option<&str>) -> Result<Estimate, CoreError> {
    if let Some(h) = hours {
        if !h.is_finite() {
            return Err(CoreError::Validation(
                "estimate_hours must be a finite number".to_string(),
            ));
        }
        if h < 0.0 {
            return Err(CoreError::Validation(format!(
                "estimate_hours must be non-negative, got {h}"
            )));
        }
    }
    Ok(Estimate {
        hours,
        notes: non_blank(notes),
    })
}

/// Normalize a manager comment: blank means "leave the stored comment alone".
pub fn normalize_comment(comment: Option<&str>) -> Option<String> {
    non_blank(comment)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_only_submitted_is_triageable() {
        assert!(ensure_triageable("Submitted").is_ok());
        for status in TicketStatus::ALL.iter().filter(|s| **s != TicketStatus::Submitted) {
            assert_matches!(ensure_triageable(status.as_str()), Err(CoreError::Conflict(_)));
        }
    }

    #[test]
    fn test_unknown_stored_status_not_triageable() {
        assert_matches!(ensure_triageable("Legacy"), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn test_permissive_policy_decides_anything() {
        for status in TicketStatus::ALL {
            assert!(ensure_decidable(status.as_str(), TransitionPolicy::Permissive).is_ok());
        }
        assert!(ensure_decidable("Legacy", TransitionPolicy::Permissive).is_ok());
    }

    #[test]
    fn test_guarded_policy_requires_pending_or_decided() {
        let guarded = TransitionPolicy::Guarded;
        assert!(ensure_decidable("Pending Manager Approval", guarded).is_ok());
        assert!(ensure_decidable("Approved", guarded).is_ok());
        assert!(ensure_decidable("Denied", guarded).is_ok());
        assert!(ensure_decidable("On Hold", guarded).is_ok());
        assert_matches!(ensure_decidable("Submitted", guarded), Err(CoreError::Conflict(_)));
        assert_matches!(ensure_decidable("In Progress", guarded), Err(CoreError::Conflict(_)));
        assert_matches!(ensure_decidable("Done", guarded), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn test_decision_targets() {
        assert_eq!(Decision::Approve.target_status(), TicketStatus::Approved);
        assert_eq!(Decision::Deny.target_status(), TicketStatus::Denied);
        assert_eq!(Decision::Hold.target_status(), TicketStatus::OnHold);
    }

    #[test]
    fn test_policy_parses_case_insensitively() {
        assert_eq!("Guarded".parse::<TransitionPolicy>().unwrap(), TransitionPolicy::Guarded);
        assert_eq!(
            " permissive ".parse::<TransitionPolicy>().unwrap(),
            TransitionPolicy::Permissive
        );
        assert!("strict".parse::<TransitionPolicy>().is_err());
    }

    #[test]
    fn test_estimate_accepts_absent_and_zero_hours() {
        assert_eq!(validate_estimate(None, None).unwrap().hours, None);
        assert_eq!(validate_estimate(Some(0.0), None).unwrap().hours, Some(0.0));
    }

    #[test]
    fn test_estimate_rejects_negative_and_nan() {
        assert_matches!(validate_estimate(Some(-1.0), None), Err(CoreError::Validation(_)));
        assert_matches!(validate_estimate(Some(f64::NAN), None), Err(CoreError::Validation(_)));
        assert_matches!(
            validate_estimate(Some(f64::INFINITY), None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_blank_notes_dropped() {
        let estimate = validate_estimate(Some(2.5), Some("  ")).unwrap();
        assert_eq!(estimate.notes, None);
        let estimate = validate_estimate(Some(2.5), Some(" vendor ")).unwrap();
        assert_eq!(estimate.notes.as_deref(), Some("vendor"));
    }

    #[test]
    fn test_blank_comment_is_absent() {
        assert_eq!(normalize_comment(Some("")), None);
        assert_eq!(normalize_comment(Some(" go ahead ")).as_deref(), Some("go ahead"));
    }
}
