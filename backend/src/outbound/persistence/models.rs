//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and
//! must never be exposed to the domain. They exist to satisfy Diesel's
//! type requirements for queries, mutations, and raw aggregate results.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date, Integer, Numeric, Text};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::schema::movements;

/// Row struct for reading from the movements table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MovementRow {
    pub id: Uuid,
    pub fecha: NaiveDate,
    pub tipo: String,
    pub monto: Decimal,
    pub descripcion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new movement records.
///
/// Identifier and timestamps are assigned by column defaults, so the
/// insert only supplies the user-provided fields.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = movements)]
pub(crate) struct NewMovementRow<'a> {
    pub fecha: NaiveDate,
    pub tipo: &'a str,
    pub monto: Decimal,
    pub descripcion: Option<&'a str>,
}

/// Raw result of the whole-table totals aggregation.
#[derive(Debug, QueryableByName)]
pub(crate) struct TotalsRow {
    #[diesel(sql_type = Numeric)]
    pub total_creditos: Decimal,
    #[diesel(sql_type = Numeric)]
    pub total_debitos: Decimal,
    #[diesel(sql_type = Numeric)]
    pub balance: Decimal,
    #[diesel(sql_type = BigInt)]
    pub total_movimientos: i64,
}

/// Raw result of the monthly aggregation routine.
#[derive(Debug, QueryableByName)]
pub(crate) struct MonthlySummaryRow {
    #[diesel(sql_type = Numeric)]
    pub total_creditos: Decimal,
    #[diesel(sql_type = Numeric)]
    pub total_debitos: Decimal,
    #[diesel(sql_type = Numeric)]
    pub balance: Decimal,
    #[diesel(sql_type = Date)]
    pub fecha_inicio: NaiveDate,
    #[diesel(sql_type = Date)]
    pub fecha_fin: NaiveDate,
}

/// Raw result of the per-type movement count query.
#[derive(Debug, QueryableByName)]
pub(crate) struct MovementCountsRow {
    #[diesel(sql_type = BigInt)]
    pub creditos: i64,
    #[diesel(sql_type = BigInt)]
    pub debitos: i64,
}

/// Raw result of the distinct-period query.
#[derive(Debug, QueryableByName)]
pub(crate) struct AvailablePeriodRow {
    #[diesel(sql_type = Integer)]
    pub year: i32,
    #[diesel(sql_type = Integer)]
    pub month: i32,
    #[diesel(sql_type = Text)]
    pub fecha: String,
}
