//! PostgreSQL-backed `MovementRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{MovementRepository, MovementRepositoryError};
use crate::domain::{Movement, MovementRecord, MovementType, NewMovement, Totals};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MovementRow, NewMovementRow, TotalsRow};
use super::pool::{DbPool, PoolError};
use super::schema::movements;

/// Whole-table aggregation mirroring the totals contract: credit sum,
/// debit magnitude sum, signed balance, and row count, zeroed when empty.
const TOTALS_SQL: &str = "\
    SELECT \
        COALESCE(SUM(CASE WHEN tipo = 'CREDITO' THEN monto ELSE 0 END), 0) AS total_creditos, \
        COALESCE(SUM(CASE WHEN tipo = 'DEBITO' THEN ABS(monto) ELSE 0 END), 0) AS total_debitos, \
        COALESCE(SUM(monto), 0) AS balance, \
        COUNT(*) AS total_movimientos \
    FROM movements";

/// Diesel-backed implementation of the movement repository port.
#[derive(Clone)]
pub struct DieselMovementRepository {
    pool: DbPool,
}

impl DieselMovementRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> MovementRepositoryError {
    map_pool_error(error, MovementRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> MovementRepositoryError {
    map_diesel_error(
        error,
        MovementRepositoryError::query,
        MovementRepositoryError::connection,
    )
}

/// Convert a database row into a domain movement.
fn row_to_movement(row: MovementRow) -> Result<Movement, MovementRepositoryError> {
    let MovementRow {
        id,
        fecha,
        tipo,
        monto,
        descripcion,
        created_at,
        updated_at,
    } = row;

    let tipo: MovementType = tipo
        .parse()
        .map_err(|_| MovementRepositoryError::query(format!("unknown movement type: {tipo}")))?;

    Ok(Movement::new(MovementRecord {
        id,
        fecha,
        tipo,
        monto,
        descripcion,
        created_at,
        updated_at,
    }))
}

#[async_trait]
impl MovementRepository for DieselMovementRepository {
    async fn create(&self, movement: &NewMovement) -> Result<Movement, MovementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let new_row = NewMovementRow {
            fecha: movement.fecha(),
            tipo: movement.tipo().as_str(),
            monto: movement.monto(),
            descripcion: movement.descripcion(),
        };

        let row: MovementRow = diesel::insert_into(movements::table)
            .values(&new_row)
            .returning(MovementRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;

        row_to_movement(row)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Movement>, MovementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let row = movements::table
            .filter(movements::id.eq(id))
            .select(MovementRow::as_select())
            .first::<MovementRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        row.map(row_to_movement).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Movement>, MovementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows: Vec<MovementRow> = movements::table
            .order((movements::fecha.desc(), movements::created_at.desc()))
            .select(MovementRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter().map(row_to_movement).collect()
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Movement>, MovementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows: Vec<MovementRow> = movements::table
            .filter(movements::fecha.between(start, end))
            .order(movements::fecha.asc())
            .select(MovementRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter().map(row_to_movement).collect()
    }

    async fn totals(&self) -> Result<Totals, MovementRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let row: TotalsRow = diesel::sql_query(TOTALS_SQL)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;

        Ok(Totals {
            total_creditos: row.total_creditos,
            total_debitos: row.total_debitos,
            balance: row.balance,
            total_movimientos: row.total_movimientos,
        })
    }
}
