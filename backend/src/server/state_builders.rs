//! Builders for the HTTP state backing the handlers.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use backend::domain::{MovementsService, ReportsService};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{DieselMovementRepository, DieselReportRepository};

use super::ServerConfig;

/// Build the HTTP state: database-backed services when a pool is
/// configured, fixture ports otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            let movements_service = Arc::new(MovementsService::new(Arc::new(
                DieselMovementRepository::new(pool.clone()),
            )));
            let reports_service = Arc::new(ReportsService::new(
                Arc::new(DieselReportRepository::new(pool.clone())),
                Arc::new(DefaultClock),
            ));
            HttpState::new(movements_service.clone(), movements_service, reports_service)
        }
        None => HttpState::fixture(),
    };

    web::Data::new(state)
}
