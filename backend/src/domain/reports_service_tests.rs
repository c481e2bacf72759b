//! Tests for the report domain services.

use chrono::{DateTime, Utc};
use mockable::MockClock;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::*;
use crate::domain::ports::{MockReportRepository, MonthlySummary, MovementCounts};
use crate::domain::ErrorCode;

fn fixture_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-04-01T09:30:00Z")
        .expect("RFC3339 fixture timestamp")
        .with_timezone(&Utc)
}

#[fixture]
fn clock() -> Arc<MockClock> {
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(fixture_now());
    Arc::new(clock)
}

fn march_summary() -> MonthlySummary {
    let period = ReportPeriod::try_new(2024, 3, 2025).expect("valid fixture period");
    MonthlySummary {
        total_creditos: dec!(100.00),
        total_debitos: dec!(40.00),
        balance: dec!(60.00),
        fecha_inicio: period.start_date(),
        fecha_fin: period.end_date(),
    }
}

#[rstest]
#[tokio::test]
async fn monthly_report_combines_summary_and_counts(clock: Arc<MockClock>) {
    let mut repo = MockReportRepository::new();
    repo.expect_monthly_summary()
        .times(1)
        .returning(|_| Ok(march_summary()));
    repo.expect_count_by_type()
        .withf(|start, end| {
            start.to_string() == "2024-03-01" && end.to_string() == "2024-03-31"
        })
        .times(1)
        .returning(|_, _| {
            Ok(MovementCounts {
                creditos: 1,
                debitos: 1,
            })
        });

    let service = ReportsService::new(Arc::new(repo), clock);
    let report = service
        .monthly_report(2024, 3)
        .await
        .expect("report succeeds");

    assert_eq!(report.total_creditos, dec!(100.00));
    assert_eq!(report.total_debitos, dec!(40.00));
    assert_eq!(report.balance, dec!(60.00));
    assert_eq!(report.cantidad_movimientos_credito, 1);
    assert_eq!(report.cantidad_movimientos_debito, 1);
}

#[rstest]
#[case(2024, 0)]
#[case(2024, 13)]
#[tokio::test]
async fn month_out_of_range_is_rejected_before_any_query(
    clock: Arc<MockClock>,
    #[case] year: i32,
    #[case] month: u32,
) {
    let mut repo = MockReportRepository::new();
    repo.expect_monthly_summary().never();
    repo.expect_count_by_type().never();

    let service = ReportsService::new(Arc::new(repo), clock);
    let err = service
        .monthly_report(year, month)
        .await
        .expect_err("month should fail");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert!(err.message().contains("Month"));
}

#[rstest]
#[case(1999)]
// The clock fixture pins "now" to 2024, so 2026 is beyond the +1 window.
#[case(2026)]
#[tokio::test]
async fn year_out_of_range_is_rejected_before_any_query(
    clock: Arc<MockClock>,
    #[case] year: i32,
) {
    let mut repo = MockReportRepository::new();
    repo.expect_monthly_summary().never();

    let service = ReportsService::new(Arc::new(repo), clock);
    let err = service
        .monthly_report(year, 6)
        .await
        .expect_err("year should fail");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert!(err.message().contains("Year"));
}

#[rstest]
#[tokio::test]
async fn next_year_is_accepted(clock: Arc<MockClock>) {
    let mut repo = MockReportRepository::new();
    repo.expect_monthly_summary()
        .returning(|period| Ok(MonthlySummary {
            total_creditos: Decimal::ZERO,
            total_debitos: Decimal::ZERO,
            balance: Decimal::ZERO,
            fecha_inicio: period.start_date(),
            fecha_fin: period.end_date(),
        }));
    repo.expect_count_by_type()
        .returning(|_, _| Ok(MovementCounts::default()));

    let service = ReportsService::new(Arc::new(repo), clock);
    let report = service
        .monthly_report(2025, 1)
        .await
        .expect("next year is within bounds");
    assert_eq!(report.balance, Decimal::ZERO);
}

#[rstest]
#[tokio::test]
async fn repository_query_errors_surface_as_internal(clock: Arc<MockClock>) {
    let mut repo = MockReportRepository::new();
    repo.expect_monthly_summary()
        .returning(|_| Err(ReportRepositoryError::query("routine returned no rows")));

    let service = ReportsService::new(Arc::new(repo), clock);
    let err = service
        .monthly_report(2024, 3)
        .await
        .expect_err("routine failure should surface");
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().contains("Error al generar reporte mensual"));
}

#[rstest]
#[tokio::test]
async fn document_renders_with_the_injected_clock(clock: Arc<MockClock>) {
    let mut repo = MockReportRepository::new();
    repo.expect_monthly_summary()
        .returning(|_| Ok(march_summary()));
    repo.expect_count_by_type()
        .returning(|_, _| Ok(MovementCounts {
            creditos: 1,
            debitos: 1,
        }));

    let service = ReportsService::new(Arc::new(repo), clock);
    let document = service
        .monthly_report_document(2024, 3)
        .await
        .expect("document succeeds");

    assert_eq!(document.filename, "reporte_mensual_2024_03.txt");
    assert!(document.body.contains("FECHA DE GENERACIÓN: 1/4/2024, 09:30:00"));
    assert!(document.body.contains("PERÍODO: Marzo 2024"));
}

#[rstest]
#[tokio::test]
async fn available_periods_pass_through(clock: Arc<MockClock>) {
    let mut repo = MockReportRepository::new();
    repo.expect_available_periods().returning(|| {
        Ok(vec![AvailablePeriod {
            year: 2024,
            month: 3,
            fecha: "2024-03".to_owned(),
        }])
    });

    let service = ReportsService::new(Arc::new(repo), clock);
    let periods = service
        .available_periods()
        .await
        .expect("periods succeed");
    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].fecha, "2024-03");
}
