//! Driven port for movement persistence.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{Movement, MovementRecord, NewMovement, Totals};

/// Errors raised by movement repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MovementRepositoryError {
    /// Repository connection could not be established.
    #[error("movement repository connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("movement repository query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl MovementRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing and reading movements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovementRepository: Send + Sync {
    /// Persist a validated movement and return the stored record with its
    /// assigned identifier and timestamps.
    async fn create(&self, movement: &NewMovement) -> Result<Movement, MovementRepositoryError>;

    /// Find a movement by id.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Movement>, MovementRepositoryError>;

    /// All movements, most recent date first, then most recent creation.
    async fn find_all(&self) -> Result<Vec<Movement>, MovementRepositoryError>;

    /// Movements whose date falls within the inclusive range, ascending.
    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Movement>, MovementRepositoryError>;

    /// Aggregate credit sum, debit magnitude sum, balance, and row count
    /// over the whole movement set.
    async fn totals(&self) -> Result<Totals, MovementRepositoryError>;
}

/// Fixture implementation for code paths that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMovementRepository;

#[async_trait]
impl MovementRepository for FixtureMovementRepository {
    async fn create(&self, movement: &NewMovement) -> Result<Movement, MovementRepositoryError> {
        let now = Utc::now();
        Ok(Movement::new(MovementRecord {
            id: Uuid::new_v4(),
            fecha: movement.fecha(),
            tipo: movement.tipo(),
            monto: movement.monto(),
            descripcion: movement.descripcion().map(str::to_owned),
            created_at: now,
            updated_at: now,
        }))
    }

    async fn find_by_id(&self, _id: &Uuid) -> Result<Option<Movement>, MovementRepositoryError> {
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<Movement>, MovementRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_date_range(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<Movement>, MovementRepositoryError> {
        Ok(Vec::new())
    }

    async fn totals(&self) -> Result<Totals, MovementRepositoryError> {
        Ok(Totals::empty())
    }
}
