//! PostgreSQL-backed `ReportRepository` implementation using Diesel ORM.
//!
//! The monthly aggregation lives in the database as the
//! `sp_generate_monthly_report` routine (see the migrations); this adapter
//! calls it and the companion count and distinct-period queries.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::sql_types::{Date, Integer};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    MonthlySummary, MovementCounts, ReportRepository, ReportRepositoryError,
};
use crate::domain::{AvailablePeriod, ReportPeriod};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AvailablePeriodRow, MonthlySummaryRow, MovementCountsRow};
use super::pool::{DbPool, PoolError};

const MONTHLY_SUMMARY_SQL: &str = "\
    SELECT total_creditos, total_debitos, balance, fecha_inicio, fecha_fin \
    FROM sp_generate_monthly_report($1, $2)";

const MOVEMENT_COUNTS_SQL: &str = "\
    SELECT \
        COUNT(CASE WHEN tipo = 'CREDITO' THEN 1 END) AS creditos, \
        COUNT(CASE WHEN tipo = 'DEBITO' THEN 1 END) AS debitos \
    FROM movements \
    WHERE fecha >= $1 AND fecha <= $2";

const AVAILABLE_PERIODS_SQL: &str = "\
    SELECT DISTINCT \
        CAST(EXTRACT(YEAR FROM fecha) AS INTEGER) AS year, \
        CAST(EXTRACT(MONTH FROM fecha) AS INTEGER) AS month, \
        TO_CHAR(fecha, 'YYYY-MM') AS fecha \
    FROM movements \
    ORDER BY year DESC, month DESC";

/// Diesel-backed implementation of the report repository port.
#[derive(Clone)]
pub struct DieselReportRepository {
    pool: DbPool,
}

impl DieselReportRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> ReportRepositoryError {
    map_pool_error(error, ReportRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> ReportRepositoryError {
    map_diesel_error(
        error,
        ReportRepositoryError::query,
        ReportRepositoryError::connection,
    )
}

fn row_to_period(row: AvailablePeriodRow) -> Result<AvailablePeriod, ReportRepositoryError> {
    let month = u32::try_from(row.month)
        .map_err(|_| ReportRepositoryError::query(format!("invalid month: {}", row.month)))?;
    Ok(AvailablePeriod {
        year: row.year,
        month,
        fecha: row.fecha,
    })
}

#[async_trait]
impl ReportRepository for DieselReportRepository {
    async fn monthly_summary(
        &self,
        period: &ReportPeriod,
    ) -> Result<MonthlySummary, ReportRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let month = i32::try_from(period.month())
            .map_err(|_| ReportRepositoryError::query("month out of range"))?;

        let row: MonthlySummaryRow = diesel::sql_query(MONTHLY_SUMMARY_SQL)
            .bind::<Integer, _>(period.year())
            .bind::<Integer, _>(month)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;

        Ok(MonthlySummary {
            total_creditos: row.total_creditos,
            total_debitos: row.total_debitos,
            balance: row.balance,
            fecha_inicio: row.fecha_inicio,
            fecha_fin: row.fecha_fin,
        })
    }

    async fn count_by_type(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<MovementCounts, ReportRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let row: MovementCountsRow = diesel::sql_query(MOVEMENT_COUNTS_SQL)
            .bind::<Date, _>(start)
            .bind::<Date, _>(end)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel)?;

        Ok(MovementCounts {
            creditos: row.creditos,
            debitos: row.debitos,
        })
    }

    async fn available_periods(&self) -> Result<Vec<AvailablePeriod>, ReportRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows: Vec<AvailablePeriodRow> = diesel::sql_query(AVAILABLE_PERIODS_SQL)
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter().map(row_to_period).collect()
    }
}
