//! Report domain services.
//!
//! Validates the requested period, delegates the aggregation to the report
//! repository (which fronts the database-side routine), and combines the
//! results into the report shape. The clock is injected so the year upper
//! bound and the generation timestamp stay testable.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{
    ReportDocument, ReportRepository, ReportRepositoryError, ReportsQuery,
};
use crate::domain::{AvailablePeriod, Error, MonthlyReport, ReportPeriod, ReportPeriodError};

fn map_repository_error(context: &str, error: ReportRepositoryError) -> Error {
    match error {
        ReportRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("{context}: {message}"))
        }
        ReportRepositoryError::Query { message } => {
            Error::internal(format!("{context}: {message}"))
        }
    }
}

fn map_period_error(error: ReportPeriodError) -> Error {
    let field = match &error {
        ReportPeriodError::MonthOutOfRange => "month",
        ReportPeriodError::YearOutOfRange => "year",
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": "out_of_range",
    }))
}

/// Report service implementing the reports driving port.
#[derive(Clone)]
pub struct ReportsService<R> {
    report_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ReportsService<R> {
    /// Create a new service with the report repository and a clock.
    pub fn new(report_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { report_repo, clock }
    }

    fn validated_period(&self, year: i32, month: u32) -> Result<ReportPeriod, Error> {
        ReportPeriod::try_new(year, month, self.clock.utc().year() + 1).map_err(map_period_error)
    }
}

impl<R> ReportsService<R>
where
    R: ReportRepository,
{
    async fn build_report(&self, period: &ReportPeriod) -> Result<MonthlyReport, Error> {
        let summary = self
            .report_repo
            .monthly_summary(period)
            .await
            .map_err(|err| map_repository_error("Error al generar reporte mensual", err))?;

        let counts = self
            .report_repo
            .count_by_type(summary.fecha_inicio, summary.fecha_fin)
            .await
            .map_err(|err| map_repository_error("Error al generar reporte mensual", err))?;

        Ok(MonthlyReport {
            total_creditos: summary.total_creditos,
            total_debitos: summary.total_debitos,
            balance: summary.balance,
            cantidad_movimientos_credito: counts.creditos,
            cantidad_movimientos_debito: counts.debitos,
            fecha_inicio: summary.fecha_inicio,
            fecha_fin: summary.fecha_fin,
        })
    }
}

#[async_trait]
impl<R> ReportsQuery for ReportsService<R>
where
    R: ReportRepository,
{
    async fn monthly_report(&self, year: i32, month: u32) -> Result<MonthlyReport, Error> {
        let period = self.validated_period(year, month)?;
        self.build_report(&period).await
    }

    async fn monthly_report_document(
        &self,
        year: i32,
        month: u32,
    ) -> Result<ReportDocument, Error> {
        let period = self.validated_period(year, month)?;
        let report = self.build_report(&period).await?;

        Ok(ReportDocument {
            filename: format!("reporte_mensual_{}_{:02}.txt", period.year(), period.month()),
            body: report.render_text(&period, self.clock.utc()),
        })
    }

    async fn available_periods(&self) -> Result<Vec<AvailablePeriod>, Error> {
        self.report_repo
            .available_periods()
            .await
            .map_err(|err| map_repository_error("Error al obtener reportes disponibles", err))
    }
}

#[cfg(test)]
#[path = "reports_service_tests.rs"]
mod tests;
