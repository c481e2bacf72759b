//! Driving port for report generation.

use async_trait::async_trait;
use chrono::{Datelike, Utc};

use crate::domain::{AvailablePeriod, Error, MonthlyReport, ReportPeriod};

/// Rendered report ready to serve as a download attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    /// Suggested attachment file name.
    pub filename: String,
    /// Plain-text document body.
    pub body: String,
}

/// Driving port for report read operations.
///
/// Period validation happens behind this port, before any query runs, so
/// every implementation rejects out-of-range months and years the same way.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportsQuery: Send + Sync {
    /// Generate the monthly report for the requested period.
    async fn monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReport, Error>;

    /// Generate the monthly report rendered as a downloadable document.
    async fn monthly_report_document(
        &self,
        year: i32,
        month: u32,
    ) -> Result<ReportDocument, Error>;

    /// Distinct periods present in the movement set, most recent first.
    async fn available_periods(&self) -> Result<Vec<AvailablePeriod>, Error>;
}

/// Fixture query reporting an empty movement set.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReportsQuery;

impl FixtureReportsQuery {
    fn validated_period(year: i32, month: u32) -> Result<ReportPeriod, Error> {
        ReportPeriod::try_new(year, month, Utc::now().year() + 1)
            .map_err(|err| Error::invalid_request(err.to_string()))
    }
}

#[async_trait]
impl ReportsQuery for FixtureReportsQuery {
    async fn monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReport, Error> {
        let period = Self::validated_period(year, month)?;
        Ok(MonthlyReport::empty(&period))
    }

    async fn monthly_report_document(
        &self,
        year: i32,
        month: u32,
    ) -> Result<ReportDocument, Error> {
        let period = Self::validated_period(year, month)?;
        let report = MonthlyReport::empty(&period);
        Ok(ReportDocument {
            filename: format!("reporte_mensual_{}_{:02}.txt", period.year(), period.month()),
            body: report.render_text(&period, Utc::now()),
        })
    }

    async fn available_periods(&self) -> Result<Vec<AvailablePeriod>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[tokio::test]
    async fn fixture_report_is_zeroed() {
        let report = FixtureReportsQuery
            .monthly_report(2024, 3)
            .await
            .expect("fixture report succeeds");
        assert_eq!(report.cantidad_movimientos_credito, 0);
        assert_eq!(report.fecha_inicio.to_string(), "2024-03-01");
    }

    #[rstest]
    #[case(2024, 13)]
    #[case(1999, 6)]
    #[tokio::test]
    async fn fixture_rejects_invalid_periods(#[case] year: i32, #[case] month: u32) {
        let err = FixtureReportsQuery
            .monthly_report(year, month)
            .await
            .expect_err("invalid period should fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_document_names_the_attachment() {
        let document = FixtureReportsQuery
            .monthly_report_document(2024, 3)
            .await
            .expect("fixture document succeeds");
        assert_eq!(document.filename, "reporte_mensual_2024_03.txt");
        assert!(document.body.contains("REPORTE MENSUAL DE MOVIMIENTOS"));
    }
}
