//! Report HTTP handlers.
//!
//! ```text
//! GET /api/reports/monthly?year=2024&month=3
//! GET /api/reports/monthly/download?year=2024&month=3
//! GET /api/reports/available
//! ```

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, get, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AvailablePeriod, Error, MonthlyReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::response::ApiResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_query_int};

/// Query parameters selecting a report period.
#[derive(Debug, Deserialize, IntoParams)]
pub struct MonthlyReportQuery {
    /// Report year, 2000 through next year.
    pub year: Option<String>,
    /// Report month, 1 through 12.
    pub month: Option<String>,
}

impl MonthlyReportQuery {
    /// Validate presence and numeric form of both parameters.
    ///
    /// Range checks live behind the reports port; this only rejects the
    /// malformed query string before any domain call.
    fn parsed(&self) -> Result<(i32, i32), Error> {
        let (Some(year), Some(month)) = (self.year.as_deref(), self.month.as_deref()) else {
            return Err(Error::invalid_request(
                "Los parámetros year y month son obligatorios",
            ));
        };

        Ok((
            parse_query_int(year, FieldName::new("year"))?,
            parse_query_int(month, FieldName::new("month"))?,
        ))
    }
}

/// Wire representation of a monthly report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlyReportBody {
    /// Sum of credit amounts in the period.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_creditos: Decimal,
    /// Sum of debit magnitudes in the period.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_debitos: Decimal,
    /// Signed sum of all amounts in the period.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub balance: Decimal,
    /// Number of credit movements in the period.
    pub cantidad_movimientos_credito: i64,
    /// Number of debit movements in the period.
    pub cantidad_movimientos_debito: i64,
    /// First day of the period.
    #[schema(value_type = String, format = "date")]
    pub fecha_inicio: chrono::NaiveDate,
    /// Last day of the period.
    #[schema(value_type = String, format = "date")]
    pub fecha_fin: chrono::NaiveDate,
}

impl From<MonthlyReport> for MonthlyReportBody {
    fn from(value: MonthlyReport) -> Self {
        Self {
            total_creditos: value.total_creditos,
            total_debitos: value.total_debitos,
            balance: value.balance,
            cantidad_movimientos_credito: value.cantidad_movimientos_credito,
            cantidad_movimientos_debito: value.cantidad_movimientos_debito,
            fecha_inicio: value.fecha_inicio,
            fecha_fin: value.fecha_fin,
        }
    }
}

/// Wire representation of an available report period.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailablePeriodBody {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
    /// `YYYY-MM` label for the period selector.
    #[schema(example = "2024-03")]
    pub fecha: String,
}

impl From<AvailablePeriod> for AvailablePeriodBody {
    fn from(value: AvailablePeriod) -> Self {
        Self {
            year: value.year,
            month: value.month,
            fecha: value.fecha,
        }
    }
}

/// Generate the monthly report as JSON.
#[utoipa::path(
    get,
    path = "/api/reports/monthly",
    params(MonthlyReportQuery),
    responses(
        (status = 200, description = "Monthly report", body = MonthlyReportBody),
        (status = 400, description = "Invalid period", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "getMonthlyReport"
)]
#[get("/reports/monthly")]
pub async fn get_monthly_report(
    state: web::Data<HttpState>,
    query: web::Query<MonthlyReportQuery>,
) -> ApiResult<HttpResponse> {
    let (year, month) = query.parsed()?;
    let report = state
        .reports
        .monthly_report(year, u32::try_from(month).unwrap_or(0))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Reporte mensual generado exitosamente",
        MonthlyReportBody::from(report),
    )))
}

/// Generate the monthly report as a downloadable text document.
#[utoipa::path(
    get,
    path = "/api/reports/monthly/download",
    params(MonthlyReportQuery),
    responses(
        (status = 200, description = "Plain-text report attachment", content_type = "text/plain"),
        (status = 400, description = "Invalid period", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "downloadMonthlyReport"
)]
#[get("/reports/monthly/download")]
pub async fn download_monthly_report(
    state: web::Data<HttpState>,
    query: web::Query<MonthlyReportQuery>,
) -> ApiResult<HttpResponse> {
    let (year, month) = query.parsed()?;
    let document = state
        .reports
        .monthly_report_document(year, u32::try_from(month).unwrap_or(0))
        .await?;

    Ok(HttpResponse::Ok()
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(document.filename)],
        })
        .content_type("text/plain; charset=utf-8")
        .body(document.body))
}

/// List the periods for which reports can be generated.
#[utoipa::path(
    get,
    path = "/api/reports/available",
    responses(
        (status = 200, description = "Available periods", body = [AvailablePeriodBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "getAvailableReports"
)]
#[get("/reports/available")]
pub async fn get_available_reports(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let periods = state.reports.available_periods().await?;
    let data: Vec<AvailablePeriodBody> =
        periods.into_iter().map(AvailablePeriodBody::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Reportes disponibles obtenidos exitosamente",
        data,
    )))
}

#[cfg(test)]
#[path = "reports_tests.rs"]
mod tests;
