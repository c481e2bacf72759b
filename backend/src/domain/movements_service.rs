//! Movement domain services.
//!
//! Implements the movement driving ports against the repository port:
//! validation and sign normalization run before any persistence call, and
//! repository failures are mapped onto the transport-agnostic error type.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::{
    CreateMovementRequest, MovementRepository, MovementRepositoryError, MovementsCommand,
    MovementsQuery,
};
use crate::domain::{Error, Movement, MovementValidationError, NewMovement, Totals};

fn map_repository_error(context: &str, error: MovementRepositoryError) -> Error {
    match error {
        MovementRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("{context}: {message}"))
        }
        MovementRepositoryError::Query { message } => {
            Error::internal(format!("{context}: {message}"))
        }
    }
}

fn map_validation_error(error: MovementValidationError) -> Error {
    let (field, code) = match &error {
        MovementValidationError::AmountZero => ("monto", "invalid_amount"),
        MovementValidationError::AmountPrecision { .. } => ("monto", "invalid_precision"),
        MovementValidationError::DescriptionTooLong { .. } => ("descripcion", "too_long"),
        MovementValidationError::InvalidType => ("tipo", "invalid_movement_type"),
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": code,
    }))
}

/// Movement service implementing the command and query driving ports.
#[derive(Clone)]
pub struct MovementsService<R> {
    movement_repo: Arc<R>,
}

impl<R> MovementsService<R> {
    /// Create a new service with the movement repository.
    pub fn new(movement_repo: Arc<R>) -> Self {
        Self { movement_repo }
    }
}

#[async_trait]
impl<R> MovementsCommand for MovementsService<R>
where
    R: MovementRepository,
{
    async fn create_movement(&self, request: CreateMovementRequest) -> Result<Movement, Error> {
        let movement = NewMovement::try_new(
            request.fecha,
            request.tipo,
            request.monto,
            request.descripcion,
        )
        .map_err(map_validation_error)?;

        self.movement_repo
            .create(&movement)
            .await
            .map_err(|err| map_repository_error("Error al crear el movimiento", err))
    }
}

#[async_trait]
impl<R> MovementsQuery for MovementsService<R>
where
    R: MovementRepository,
{
    async fn list_movements(&self) -> Result<Vec<Movement>, Error> {
        self.movement_repo
            .find_all()
            .await
            .map_err(|err| map_repository_error("Error al obtener movimientos", err))
    }

    async fn get_movement(&self, id: Uuid) -> Result<Movement, Error> {
        self.movement_repo
            .find_by_id(&id)
            .await
            .map_err(|err| map_repository_error("Error al obtener el movimiento", err))?
            .ok_or_else(|| Error::not_found(format!("Movimiento con ID {id} no encontrado")))
    }

    async fn totals(&self) -> Result<Totals, Error> {
        self.movement_repo
            .totals()
            .await
            .map_err(|err| map_repository_error("Error al calcular totales", err))
    }
}

#[cfg(test)]
#[path = "movements_service_tests.rs"]
mod tests;
