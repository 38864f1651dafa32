//! Handler for the intake form option lists.

use axum::Json;
use intake_core::ticket::{Department, Impact, Priority, TicketStatus, FILTER_ALL};
use serde::Serialize;

use crate::response::DataResponse;

/// Allowed values and defaults for every enumerated ticket field.
#[derive(Debug, Serialize)]
pub struct IntakeOptions {
    pub priorities: Vec<&'static str>,
    pub impacts: Vec<&'static str>,
    pub departments: Vec<&'static str>,
    pub statuses: Vec<&'static str>,
    pub defaults: OptionDefaults,
    /// Filter value that matches every status or department.
    pub filter_all: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionDefaults {
    pub priority: Priority,
    pub impact: Impact,
    pub department: Department,
}

/// GET /api/v1/options
pub async fn get_options() -> Json<DataResponse<IntakeOptions>> {
    Json(DataResponse {
        data: IntakeOptions {
            priorities: Priority::labels(),
            impacts: Impact::labels(),
            departments: Department::labels(),
            statuses: TicketStatus::labels(),
            defaults: OptionDefaults {
                priority: Priority::default(),
                impact: Impact::default(),
                department: Department::default(),
            },
            filter_all: FILTER_ALL,
        },
    })
}
