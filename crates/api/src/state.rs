use std::sync::Arc;

use intake_db::workflow::TicketWorkflow;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and workflow wrap reference-counted handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: intake_db::DbPool,
    /// Server configuration (PINs, token settings, decision policy).
    pub config: Arc<ServerConfig>,
    /// Ticket workflow bound to `pool`.
    pub workflow: TicketWorkflow,
}

impl AppState {
    /// Build state around a pool, wiring the workflow with the configured policy.
    pub fn new(pool: intake_db::DbPool, config: ServerConfig) -> Self {
        let workflow = TicketWorkflow::new(pool.clone(), config.decision_policy);
        Self {
            pool,
            config: Arc::new(config),
            workflow,
        }
    }
}
