//! Driving port for movement mutations.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{Error, Movement, MovementRecord, MovementType, NewMovement};

/// Request to record a movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMovementRequest {
    /// Movement date.
    pub fecha: NaiveDate,
    /// Movement direction.
    pub tipo: MovementType,
    /// Amount as supplied by the caller; the sign is normalized on create.
    pub monto: Decimal,
    /// Optional description.
    pub descripcion: Option<String>,
}

/// Driving port for movement write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovementsCommand: Send + Sync {
    /// Validate, normalize, and persist a movement, returning the stored
    /// record with its assigned identifier and timestamps.
    async fn create_movement(&self, request: CreateMovementRequest) -> Result<Movement, Error>;
}

/// Fixture command that validates and echoes without persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMovementsCommand;

#[async_trait]
impl MovementsCommand for FixtureMovementsCommand {
    async fn create_movement(&self, request: CreateMovementRequest) -> Result<Movement, Error> {
        let movement = NewMovement::try_new(
            request.fecha,
            request.tipo,
            request.monto,
            request.descripcion,
        )
        .map_err(|err| Error::invalid_request(err.to_string()))?;

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
}
