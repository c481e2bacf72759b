//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers every HTTP endpoint from the inbound layer plus the schema
//! wrappers for domain types. The generated document backs Swagger UI in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::movements::{CreateMovementRequestBody, MovementBody, TotalsBody};
use crate::inbound::http::reports::{AvailablePeriodBody, MonthlyReportBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movimientos backend API",
        description = "HTTP interface for recording ledger movements and generating monthly reports."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::movements::create_movement,
        crate::inbound::http::movements::list_movements,
        crate::inbound::http::movements::get_totals,
        crate::inbound::http::movements::get_movement,
        crate::inbound::http::reports::get_monthly_report,
        crate::inbound::http::reports::download_monthly_report,
        crate::inbound::http::reports::get_available_reports,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateMovementRequestBody,
        MovementBody,
        TotalsBody,
        MonthlyReportBody,
        AvailablePeriodBody,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "movements", description = "Operations on ledger movements"),
        (name = "reports", description = "Monthly aggregate reports"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;

    #[test]
    fn openapi_document_registers_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in [
            "/api/movements",
            "/api/movements/totals",
            "/api/movements/{id}",
            "/api/reports/monthly",
            "/api/reports/monthly/download",
            "/api/reports/available",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn openapi_error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        // utoipa replaces :: with . in schema names.
        assert!(schemas.contains_key("crate.domain.Error"));
        assert!(schemas.contains_key("MovementBody"));
    }
}
