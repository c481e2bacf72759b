//! Tests for report HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use super::*;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::fixture()))
        .service(
            web::scope("/api")
                .service(get_monthly_report)
                .service(download_monthly_report)
                .service(get_available_reports),
        )
}

#[actix_web::test]
async fn monthly_report_returns_zeroed_period() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reports/monthly?year=2024&month=3")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Reporte mensual generado exitosamente");
    assert_eq!(body["data"]["total_creditos"], json!(0.0));
    assert_eq!(body["data"]["total_debitos"], json!(0.0));
    assert_eq!(body["data"]["balance"], json!(0.0));
    assert_eq!(body["data"]["cantidad_movimientos_credito"], 0);
    assert_eq!(body["data"]["cantidad_movimientos_debito"], 0);
    assert_eq!(body["data"]["fecha_inicio"], "2024-03-01");
    assert_eq!(body["data"]["fecha_fin"], "2024-03-31");
}

#[actix_web::test]
async fn monthly_report_requires_both_parameters() {
    let app = actix_test::init_service(test_app()).await;

    for uri in [
        "/api/reports/monthly",
        "/api/reports/monthly?year=2024",
        "/api/reports/monthly?month=3",
    ] {
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body["message"],
            "Los parámetros year y month son obligatorios"
        );
    }
}

#[actix_web::test]
async fn monthly_report_rejects_non_numeric_parameters() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reports/monthly?year=dosmil&month=3")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Year y month deben ser números válidos");
}

#[actix_web::test]
async fn monthly_report_rejects_month_out_of_range() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reports/monthly?year=2024&month=13")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Month debe estar entre 1 y 12");
}

#[actix_web::test]
async fn monthly_report_rejects_year_before_2000() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reports/monthly?year=1999&month=6")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Year debe ser un año válido");
}

#[actix_web::test]
async fn download_serves_text_attachment() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reports/monthly/download?year=2024&month=3")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/plain"));

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("reporte_mensual_2024_03.txt"));

    let body = actix_test::read_body(response).await;
    let text = std::str::from_utf8(&body).expect("utf8 body");
    assert!(text.contains("REPORTE MENSUAL DE MOVIMIENTOS"));
    assert!(text.contains("PERÍODO: Marzo 2024"));
}

#[actix_web::test]
async fn available_reports_wrap_empty_set() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reports/available")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        "Reportes disponibles obtenidos exitosamente"
    );
    assert_eq!(body["data"], json!([]));
}
