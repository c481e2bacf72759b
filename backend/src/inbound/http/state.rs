//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend
//! only on the domain driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureMovementsCommand, FixtureMovementsQuery, FixtureReportsQuery, MovementsCommand,
    MovementsQuery, ReportsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Movement write operations.
    pub movements: Arc<dyn MovementsCommand>,
    /// Movement read operations.
    pub movements_query: Arc<dyn MovementsQuery>,
    /// Report read operations.
    pub reports: Arc<dyn ReportsQuery>,
}

impl HttpState {
    /// Construct state from concrete port implementations.
    pub fn new(
        movements: Arc<dyn MovementsCommand>,
        movements_query: Arc<dyn MovementsQuery>,
        reports: Arc<dyn ReportsQuery>,
    ) -> Self {
        Self {
            movements,
            movements_query,
            reports,
        }
    }

    /// State backed entirely by fixture ports, for tests and for running
    /// without a database.
    pub fn fixture() -> Self {
        Self {
            movements: Arc::new(FixtureMovementsCommand),
            movements_query: Arc::new(FixtureMovementsQuery),
            reports: Arc::new(FixtureReportsQuery),
        }
    }
}
