//! Tests for the backend application bootstrap and readiness signalling.

use actix_web::web;
use rstest::{fixture, rstest};

use super::server::{ServerConfig, create_server};
use backend::inbound::http::health::HealthState;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> (String, u16) {
    ("127.0.0.1".into(), 0)
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    bind_address: (String, u16),
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("server should bind an ephemeral port");

    assert!(health_state.is_ready(), "state should be ready after wiring");
}

#[rstest]
#[actix_rt::test]
async fn create_server_without_pool_uses_fixture_ports(
    health_state: web::Data<HealthState>,
    bind_address: (String, u16),
) {
    // Binding twice on port 0 must not collide.
    let first = create_server(health_state.clone(), ServerConfig::new(bind_address.clone()))
        .expect("first server binds");
    let second = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("second server binds");

    drop(first);
    drop(second);
}
