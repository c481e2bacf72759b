//! Driven port for report aggregation reads.
//!
//! The heavy lifting happens inside the datastore: a predefined routine
//! computes the monthly totals and resolves the period boundaries, and a
//! companion query counts movements per type within those boundaries.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{AvailablePeriod, ReportPeriod};

/// Errors raised by report repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportRepositoryError {
    /// Repository connection could not be established.
    #[error("report repository connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query failed during execution or returned a malformed result.
    #[error("report repository query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

impl ReportRepositoryError {
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

/// Result of the database-side monthly aggregation routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Sum of credit amounts in the period.
    pub total_creditos: Decimal,
    /// Sum of debit magnitudes in the period.
    pub total_debitos: Decimal,
    /// Signed sum of all amounts in the period.
    pub balance: Decimal,
    /// First day of the resolved period.
    pub fecha_inicio: NaiveDate,
    /// Last day of the resolved period.
    pub fecha_fin: NaiveDate,
}

/// Per-type movement counts within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementCounts {
    /// Number of credit movements.
    pub creditos: i64,
    /// Number of debit movements.
    pub debitos: i64,
}

/// Port for report aggregation queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Run the monthly aggregation routine for the period.
    async fn monthly_summary(
        &self,
        period: &ReportPeriod,
    ) -> Result<MonthlySummary, ReportRepositoryError>;

    /// Count credit and debit movements within the inclusive date range.
    async fn count_by_type(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<MovementCounts, ReportRepositoryError>;

    /// Distinct periods present in the movement set, most recent first.
    async fn available_periods(&self) -> Result<Vec<AvailablePeriod>, ReportRepositoryError>;
}

/// Fixture implementation reporting an empty movement set.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReportRepository;

#[async_trait]
impl ReportRepository for FixtureReportRepository {
    async fn monthly_summary(
        &self,
        period: &ReportPeriod,
    ) -> Result<MonthlySummary, ReportRepositoryError> {
        Ok(MonthlySummary {
            total_creditos: Decimal::ZERO,
            total_debitos: Decimal::ZERO,
            balance: Decimal::ZERO,
            fecha_inicio: period.start_date(),
            fecha_fin: period.end_date(),
        })
    }

    async fn count_by_type(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<MovementCounts, ReportRepositoryError> {
        Ok(MovementCounts::default())
    }

    async fn available_periods(&self) -> Result<Vec<AvailablePeriod>, ReportRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_summary_is_zeroed_with_resolved_bounds() {
        let period = ReportPeriod::try_new(2024, 2, 2027).expect("valid period");
        let summary = FixtureReportRepository
            .monthly_summary(&period)
            .await
            .expect("fixture summary succeeds");

        assert_eq!(summary.total_creditos, Decimal::ZERO);
        assert_eq!(summary.fecha_inicio.to_string(), "2024-02-01");
        assert_eq!(summary.fecha_fin.to_string(), "2024-02-29");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_periods_are_empty() {
        let periods = FixtureReportRepository
            .available_periods()
            .await
            .expect("fixture periods succeed");
        assert!(periods.is_empty());
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = ReportRepositoryError::connection("refused");
        assert!(err.to_string().contains("refused"));
    }
}
