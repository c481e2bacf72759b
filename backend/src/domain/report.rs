//! Monthly report aggregates and rendering.
//!
//! A report is derived on demand from the movement set for one calendar
//! month. [`ReportPeriod`] validates the requested month before any query
//! runs; [`MonthlyReport`] is the combined aggregate shape; the text
//! rendering produces the downloadable fixed-width document.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earliest year a report may be requested for.
pub const REPORT_MIN_YEAR: i32 = 2000;

/// Spanish month names indexed by `month - 1`.
const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Validation errors raised while building a [`ReportPeriod`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportPeriodError {
    /// The month falls outside 1..=12.
    MonthOutOfRange,
    /// The year falls outside `[REPORT_MIN_YEAR, max_year]`.
    YearOutOfRange,
}

impl fmt::Display for ReportPeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthOutOfRange => write!(f, "Month debe estar entre 1 y 12"),
            Self::YearOutOfRange => write!(f, "Year debe ser un año válido"),
        }
    }
}

impl std::error::Error for ReportPeriodError {}

/// Validated year/month pair for a monthly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
}

impl ReportPeriod {
    /// Validate a requested period.
    ///
    /// `max_year` is the inclusive upper bound for the year, supplied by
    /// the caller so the ambient clock stays injectable.
    pub fn try_new(year: i32, month: u32, max_year: i32) -> Result<Self, ReportPeriodError> {
        if !(1..=12).contains(&month) {
            return Err(ReportPeriodError::MonthOutOfRange);
        }
        if !(REPORT_MIN_YEAR..=max_year).contains(&year) {
            return Err(ReportPeriodError::YearOutOfRange);
        }
        Ok(Self { year, month })
    }

    /// Requested year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Requested month, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the period.
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| panic!("validated period {}-{} out of range", self.year, self.month))
    }

    /// Last day of the period.
    pub fn end_date(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first| first.pred_opt())
            .unwrap_or_else(|| panic!("validated period {}-{} out of range", self.year, self.month))
    }

    /// Spanish month name for headings.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Compact `YYYY-MM` label used by the period selector.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

/// Distinct period present in the movement set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailablePeriod {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
    /// `YYYY-MM` label.
    pub fecha: String,
}

/// Derived aggregate of movements within one calendar month.
///
/// Debit totals are positive magnitudes, matching the aggregation routine,
/// so `balance == total_creditos - total_debitos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Sum of credit amounts in the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_creditos: Decimal,
    /// Sum of debit magnitudes in the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_debitos: Decimal,
    /// Signed sum of all amounts in the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// Number of credit movements in the period.
    pub cantidad_movimientos_credito: i64,
    /// Number of debit movements in the period.
    pub cantidad_movimientos_debito: i64,
    /// First day of the period.
    pub fecha_inicio: NaiveDate,
    /// Last day of the period.
    pub fecha_fin: NaiveDate,
}

impl MonthlyReport {
    /// Zeroed report for a period with no movements.
    pub fn empty(period: &ReportPeriod) -> Self {
        Self {
            total_creditos: Decimal::ZERO,
            total_debitos: Decimal::ZERO,
            balance: Decimal::ZERO,
            cantidad_movimientos_credito: 0,
            cantidad_movimientos_debito: 0,
            fecha_inicio: period.start_date(),
            fecha_fin: period.end_date(),
        }
    }

    /// Render the report as the downloadable plain-text document.
    pub fn render_text(&self, period: &ReportPeriod, generated_at: DateTime<Utc>) -> String {
        let heavy = "═".repeat(63);
        let light = "─".repeat(63);
        let estado = if self.balance >= Decimal::ZERO {
            "✓ POSITIVO"
        } else {
            "⚠ NEGATIVO"
        };
        let total_movimientos =
            self.cantidad_movimientos_credito + self.cantidad_movimientos_debito;

        format!(
            "{heavy}\n\
             {:^63}\n\
             {heavy}\n\
             \n\
             PERÍODO: {} {}\n\
             FECHA DE GENERACIÓN: {}\n\
             RANGO: {} - {}\n\
             \n\
             {light}\n\
             {:^63}\n\
             {light}\n\
             \n\
             Total Créditos:      {}\n\
             Total Débitos:       {}\n\
             Balance Final:       {}\n\
             \n\
             {light}\n\
             {:^63}\n\
             {light}\n\
             \n\
             Movimientos de Crédito:    {}\n\
             Movimientos de Débito:     {}\n\
             Total de Movimientos:      {}\n\
             \n\
             {light}\n\
             \n\
             Estado del Balance: {estado}\n\
             \n\
             {heavy}\n\
             {:^63}\n\
             {heavy}",
            "REPORTE MENSUAL DE MOVIMIENTOS",
            period.month_name(),
            period.year(),
            generated_at.format("%-d/%-m/%Y, %H:%M:%S"),
            self.fecha_inicio.format("%-d/%-m/%Y"),
            self.fecha_fin.format("%-d/%-m/%Y"),
            "RESUMEN FINANCIERO",
            format_eur(self.total_creditos),
            format_eur(self.total_debitos),
            format_eur(self.balance),
            "DETALLE DE MOVIMIENTOS",
            self.cantidad_movimientos_credito,
            self.cantidad_movimientos_debito,
            total_movimientos,
            "Generado por Sistema de Movimientos",
        )
    }
}

/// Format an amount the way es-ES renders EUR currency.
///
/// Thousands are separated with `.`, decimals with `,`, and the euro sign
/// trails the value.
///
/// # Examples
/// ```
/// use backend::domain::format_eur;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_eur(Decimal::new(123_456, 2)), "1.234,56 €");
/// assert_eq!(format_eur(Decimal::new(-50, 1)), "-5,00 €");
/// ```
pub fn format_eur(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let rendered = rounded.abs().to_string();
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{fraction} €")
}
