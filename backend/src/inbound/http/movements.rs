//! Movement HTTP handlers.
//!
//! ```text
//! POST /api/movements
//! GET  /api/movements
//! GET  /api/movements/totals
//! GET  /api/movements/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CreateMovementRequest;
use crate::domain::{Movement, Totals};
use crate::inbound::http::ApiResult;
use crate::inbound::http::response::ApiResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_amount, parse_date, parse_movement_type, parse_uuid,
};

/// Request payload for creating a movement.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateMovementRequestBody {
    /// Movement date as `YYYY-MM-DD`.
    #[schema(value_type = String, format = "date", example = "2024-03-01")]
    pub fecha: String,
    /// Movement type, `CREDITO` or `DEBITO`.
    #[schema(example = "DEBITO")]
    pub tipo: String,
    /// Amount with at most two decimal places; the sign is normalized.
    #[schema(value_type = f64, example = 50.00)]
    pub monto: serde_json::Number,
    /// Optional description, at most 255 characters.
    pub descripcion: Option<String>,
}

/// Wire representation of a stored movement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovementBody {
    /// Stable identifier.
    pub id: uuid::Uuid,
    /// Movement date.
    #[schema(value_type = String, format = "date")]
    pub fecha: chrono::NaiveDate,
    /// Movement type label.
    pub tipo: String,
    /// Signed amount; positive for credits, negative for debits.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub monto: Decimal,
    /// Optional description.
    pub descripcion: Option<String>,
    /// Creation timestamp.
    #[schema(value_type = String, format = "date-time")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last-update timestamp.
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Movement> for MovementBody {
    fn from(value: Movement) -> Self {
        Self {
            id: value.id(),
            fecha: value.fecha(),
            tipo: value.tipo().to_string(),
            monto: value.monto(),
            descripcion: value.descripcion().map(str::to_owned),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
        }
    }
}

/// Wire representation of the running totals.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalsBody {
    /// Sum of credit amounts.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_creditos: Decimal,
    /// Sum of debit magnitudes.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_debitos: Decimal,
    /// Sum of all signed amounts.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub balance: Decimal,
    /// Number of movements.
    pub total_movements: i64,
}

impl From<Totals> for TotalsBody {
    fn from(value: Totals) -> Self {
        Self {
            total_creditos: value.total_creditos,
            total_debitos: value.total_debitos,
            balance: value.balance,
            total_movements: value.total_movimientos,
        }
    }
}

fn parse_create_request(body: CreateMovementRequestBody) -> ApiResult<CreateMovementRequest> {
    Ok(CreateMovementRequest {
        fecha: parse_date(&body.fecha, FieldName::new("fecha"))?,
        tipo: parse_movement_type(&body.tipo, FieldName::new("tipo"))?,
        monto: parse_amount(&body.monto, FieldName::new("monto"))?,
        descripcion: body.descripcion,
    })
}

/// Record a movement.
#[utoipa::path(
    post,
    path = "/api/movements",
    request_body = CreateMovementRequestBody,
    responses(
        (status = 201, description = "Movement created", body = MovementBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["movements"],
    operation_id = "createMovement"
)]
#[post("/movements")]
pub async fn create_movement(
    state: web::Data<HttpState>,
    payload: web::Json<CreateMovementRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = parse_create_request(payload.into_inner())?;
    let movement = state.movements.create_movement(request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        "Movimiento creado exitosamente",
        MovementBody::from(movement),
    )))
}

/// List all movements, most recent first.
#[utoipa::path(
    get,
    path = "/api/movements",
    responses(
        (status = 200, description = "Movements", body = [MovementBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["movements"],
    operation_id = "listMovements"
)]
#[get("/movements")]
pub async fn list_movements(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let movements = state.movements_query.list_movements().await?;
    let data: Vec<MovementBody> = movements.into_iter().map(MovementBody::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Movimientos obtenidos exitosamente",
        data,
    )))
}

/// Aggregate totals over the whole movement set.
#[utoipa::path(
    get,
    path = "/api/movements/totals",
    responses(
        (status = 200, description = "Totals", body = TotalsBody),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["movements"],
    operation_id = "getTotals"
)]
#[get("/movements/totals")]
pub async fn get_totals(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let totals = state.movements_query.totals().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Totales calculados exitosamente",
        TotalsBody::from(totals),
    )))
}

/// Fetch one movement by id.
#[utoipa::path(
    get,
    path = "/api/movements/{id}",
    params(("id" = String, Path, description = "Movement identifier")),
    responses(
        (status = 200, description = "Movement", body = MovementBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Movement not found", body = ErrorSchema)
    ),
    tags = ["movements"],
    operation_id = "getMovement"
)]
#[get("/movements/{id}")]
pub async fn get_movement(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;
    let movement = state.movements_query.get_movement(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Movimiento obtenido exitosamente",
        MovementBody::from(movement),
    )))
}

#[cfg(test)]
#[path = "movements_tests.rs"]
mod tests;
