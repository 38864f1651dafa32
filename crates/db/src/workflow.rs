//! Ticket workflow service.
//!
//! Binds the pure transition rules in `intake_core::workflow` to the ticket
//! store. The service owns a pool handle and is passed explicitly to whoever
//! needs it; nothing here reads global state.

use intake_core::access::{Grant, Role};
use intake_core::error::CoreError;
use intake_core::submission::{validate_submission, SubmissionInput};
use intake_core::types::DbId;
use intake_core::workflow::{
    ensure_decidable, ensure_triageable, normalize_comment, validate_estimate, Decision,
    TransitionPolicy,
};

use crate::models::ticket::{CreateTicket, Ticket};
use crate::repositories::TicketRepo;
use crate::DbPool;

/// Entity name reported in `NotFound` errors.
const TICKET_ENTITY: &str = "Ticket";

/// Errors from workflow operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// The action was rejected by a domain rule.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store failed; nothing was written.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Drives tickets through submit, triage, and manager decision.
#[derive(Debug, Clone)]
pub struct TicketWorkflow {
    pool: DbPool,
    policy: TransitionPolicy,
}

impl TicketWorkflow {
    pub fn new(pool: DbPool, policy: TransitionPolicy) -> Self {
        Self { pool, policy }
    }

    /// Validate and store a requester submission.
    ///
    /// Nothing is written when a required field is missing.
    pub async fn submit(&self, input: &SubmissionInput) -> WorkflowResult<Ticket> {
        let submission = validate_submission(input)?;
        let ticket = TicketRepo::create(&self.pool, &CreateTicket::from(submission)).await?;

        tracing::info!(
            ticket_id = ticket.id,
            priority = %ticket.priority,
            department = %ticket.department,
            "Ticket submitted"
        );
        Ok(ticket)
    }

    /// Attach the reviewer's estimate and forward the ticket for approval.
    pub async fn triage_forward(
        &self,
        grant: &Grant,
        id: DbId,
        hours: Option<f64>,
        notes: Option<&str>,
    ) -> WorkflowResult<Ticket> {
        grant.require(Role::Reviewer)?;
        let estimate = validate_estimate(hours, notes)?;

        let current = self.find(id).await?;
        ensure_triageable(&current.status)?;

        let ticket = TicketRepo::set_triage(
            &self.pool,
            id,
            estimate.hours,
            estimate.notes.as_deref(),
            &grant.actor,
        )
        .await?
        .ok_or(CoreError::NotFound {
            entity: TICKET_ENTITY,
            id,
        })?;

        tracing::info!(
            ticket_id = id,
            actor = %grant.actor,
            estimate_hours = ?estimate.hours,
            "Ticket triaged and forwarded for approval"
        );
        Ok(ticket)
    }

    /// Record a manager decision, overwriting the comment only when one is
    /// given.
    pub async fn manager_decide(
        &self,
        grant: &Grant,
        id: DbId,
        decision: Decision,
        comment: Option<&str>,
    ) -> WorkflowResult<Ticket> {
        grant.require(Role::Manager)?;

        let current = self.find(id).await?;
        ensure_decidable(&current.status, self.policy)?;

        let target = decision.target_status();
        let comment = normalize_comment(comment);
        let ticket = TicketRepo::update_status(&self.pool, id, target, comment.as_deref())
            .await?
            .ok_or(CoreError::NotFound {
                entity: TICKET_ENTITY,
                id,
            })?;

        tracing::info!(
            ticket_id = id,
            actor = %grant.actor,
            from = %current.status,
            to = %target,
            policy = %self.policy,
            "Manager decision recorded"
        );
        Ok(ticket)
    }

    /// Fetch a ticket or fail with `NotFound`.
    pub async fn find(&self, id: DbId) -> WorkflowResult<Ticket> {
        TicketRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: TICKET_ENTITY,
                    id,
                }
                .into()
            })
    }
}
