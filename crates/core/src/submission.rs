//! Requester submission validation.
//!
//! A submission is accepted only when every required text field is non-empty
//! after trimming. All missing fields are reported at once so the requester
//! can fix the form in one pass.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CoreError;
use crate::ticket::{Department, Impact, Priority};

/// Required field names, in form order.
pub const REQUIRED_FIELDS: &[&str] = &[
    "project_name",
    "requester_name",
    "requester_email",
    "description",
];

/// Raw submission as entered on the intake form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionInput {
    pub project_name: Option<String>,
    pub department: Option<Department>,
    pub requester_name: Option<String>,
    pub requester_email: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub impact: Option<Impact>,
    pub due_date: Option<NaiveDate>,
    pub attachments: Option<String>,
}

/// A validated submission with trimmed text and defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub project_name: String,
    pub department: Department,
    pub requester_name: String,
    pub requester_email: String,
    pub description: String,
    pub priority: Priority,
    pub impact: Impact,
    pub due_date: Option<NaiveDate>,
    pub attachments: Option<String>,
}

/// Trim a value, mapping blank input to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Validate a submission, reporting every missing required field.
pub fn validate_submission(input: &SubmissionInput) -> Result<Submission, CoreError> {
    let project_name = non_blank(input.project_name.as_deref());
    let requester_name = non_blank(input.requester_name.as_deref());
    let requester_email = non_blank(input.requester_email.as_deref());
    let description = non_blank(input.description.as_deref());

    let present = [
        project_name.is_some(),
        requester_name.is_some(),
        requester_email.is_some(),
        description.is_some(),
    ];
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .zip(present)
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| *name)
        .collect();

    match (project_name, requester_name, requester_email, description) {
        (Some(project_name), Some(requester_name), Some(requester_email), Some(description)) => {
            Ok(Submission {
                project_name,
                department: input.department.unwrap_or_default(),
                requester_name,
                requester_email,
                description,
                priority: input.priority.unwrap_or_default(),
                impact: input.impact.unwrap_or_default(),
                due_date: input.due_date,
                attachments: non_blank(input.attachments.as_deref()),
            })
        }
        _ => Err(CoreError::MissingFields(missing)),
    }
}
