#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{test, web};
use backend::extractors::host_key::HOST_KEY_HEADER;
use backend::state::app_state::AppState;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}

/// Matches `HostConfig::default()`, which `AppState::for_tests()` uses.
pub const TEST_HOST_KEY: &str = "host_key_for_tests_only";

pub fn test_data() -> web::Data<AppState> {
    web::Data::new(AppState::for_tests())
}

pub fn host_header() -> (&'static str, &'static str) {
    (HOST_KEY_HEADER, TEST_HOST_KEY)
}

/// Validate a problem+json response and return the parsed body.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> Value {
    assert_eq!(resp.status().as_u16(), expected_status);

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(content_type, "application/problem+json");

    let body = test::read_body(resp).await;
    let problem: Value = serde_json::from_slice(&body).expect("problem body should be JSON");

    assert_eq!(problem["code"], expected_code);
    assert_eq!(problem["status"], expected_status);
    assert!(problem.get("type").is_some());
    assert!(problem.get("title").is_some());
    assert!(problem.get("detail").is_some());
    assert!(problem.get("trace_id").is_some());

    problem
}

/// Read a successful JSON body.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    assert!(
        resp.status().is_success(),
        "expected success, got {}",
        resp.status()
    );
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("body should be JSON")
}
