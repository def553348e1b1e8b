// Test Assertion Helpers
//
// Common assertions for the JSON envelope returned by every endpoint.

use actix_web::http::StatusCode;
use serde_json::Value;

use super::test_server::ApiResult;

/// Assert a 201 success envelope
pub fn assert_created(result: &ApiResult) {
    assert_eq!(
        result.status,
        StatusCode::CREATED,
        "Expected 201 Created, got {}: {}",
        result.status,
        result.body
    );
    assert_success_envelope(&result.body);
}

/// Assert a 200 success envelope
pub fn assert_ok(result: &ApiResult) {
    assert_eq!(
        result.status,
        StatusCode::OK,
        "Expected 200 OK, got {}: {}",
        result.status,
        result.body
    );
    assert_success_envelope(&result.body);
}

/// Assert a failure envelope with the given status
pub fn assert_failure(result: &ApiResult, status: StatusCode) {
    assert_eq!(
        result.status, status,
        "Expected {}, got {}: {}",
        status, result.status, result.body
    );
    assert_eq!(result.body["success"], Value::Bool(false));
    assert!(
        result.body["message"].is_string(),
        "Failure envelope must carry a message: {}",
        result.body
    );
}

pub fn assert_not_found(result: &ApiResult) {
    assert_failure(result, StatusCode::NOT_FOUND);
}

pub fn assert_bad_request(result: &ApiResult) {
    assert_failure(result, StatusCode::BAD_REQUEST);
}

pub fn assert_success_envelope(body: &Value) {
    assert_eq!(body["success"], Value::Bool(true), "Not a success envelope: {}", body);
    assert!(body.get("data").is_some(), "Success envelope must carry data");
    assert!(body.get("message").is_none(), "Success envelope must not carry a message");
}

/// Assert a JSON number equals `expected`
pub fn assert_amount(value: &Value, expected: f64) {
    let actual = value
        .as_f64()
        .unwrap_or_else(|| panic!("Expected a JSON number, got {}", value));
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {}, got {}",
        expected,
        actual
    );
}
