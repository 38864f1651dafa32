//! Ticket option sets: priority, impact, department, and lifecycle status.
//!
//! Every enum is stored in the database and sent over the wire as its
//! display label (e.g. `"Pending Manager Approval"`), so rows written by
//! other tools stay readable as plain text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Sentinel accepted by list filters meaning "do not filter on this field".
pub const FILTER_ALL: &str = "(all)";

/// Rank given to a priority label that is not one of [`Priority::ALL`].
pub const UNKNOWN_PRIORITY_RANK: u8 = 5;

macro_rules! define_option_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored / displayed label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Every label, in display order.
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        CoreError::Validation(format!(
                            "Invalid {} '{s}'. Must be one of: {}",
                            $what,
                            Self::labels().join(", ")
                        ))
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_option_enum! {
    /// How urgent the requester considers the project.
    Priority ("priority") {
        Critical => "Critical",
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

define_option_enum! {
    /// The primary business area the project affects.
    Impact ("impact") {
        RevenueSales => "Revenue / Sales",
        CustomerFacing => "Customer-facing",
        ComplianceRisk => "Compliance / Risk",
        OperationalEfficiency => "Operational Efficiency",
        InternalProductivity => "Internal Productivity",
        DataQuality => "Data Quality",
        Other => "Other",
    }
}

define_option_enum! {
    /// Requesting department.
    Department ("department") {
        Sales => "Sales",
        Engineering => "Engineering",
        SupplyChain => "Supply Chain",
        Finance => "Finance",
        Operations => "Operations",
        It => "IT",
        Marketing => "Marketing",
        Hr => "HR",
        Other => "Other",
    }
}

define_option_enum! {
    /// Ticket lifecycle status.
    ///
    /// `InProgress` and `Done` are valid values but no workflow operation
    /// moves a ticket into or out of them.
    TicketStatus ("status") {
        Submitted => "Submitted",
        PendingManagerApproval => "Pending Manager Approval",
        Approved => "Approved",
        Denied => "Denied",
        OnHold => "On Hold",
        InProgress => "In Progress",
        Done => "Done",
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Default for Impact {
    fn default() -> Self {
        Impact::OperationalEfficiency
    }
}

impl Default for Department {
    fn default() -> Self {
        Department::Sales
    }
}

impl Priority {
    /// Sort rank used by ticket listings (Critical first).
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
        }
    }
}

/// Rank a stored priority label, placing unknown labels last.
pub fn priority_rank(label: &str) -> u8 {
    label
        .parse::<Priority>()
        .map(Priority::rank)
        .unwrap_or(UNKNOWN_PRIORITY_RANK)
}

impl TicketStatus {
    /// Whether a manager decision can land a ticket in this status.
    pub fn is_decision(self) -> bool {
        matches!(
            self,
            TicketStatus::Approved | TicketStatus::Denied | TicketStatus::OnHold
        )
    }
}

/// Normalize a list filter value: `None` when absent, blank, or a sentinel
/// meaning "all".
pub fn active_filter(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    if value.is_empty() || value == FILTER_ALL || value.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(value)
    }
}
