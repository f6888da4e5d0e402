//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert an error response with the given status and message
pub fn assert_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    assert_json_status(response, expected.as_u16());
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"].as_str(), Some(message));
}

/// Hex codes of `sortedColors`, in response order
pub fn sorted_hexes(json: &serde_json::Value) -> Vec<String> {
    json["sortedColors"]
        .as_array()
        .expect("sortedColors should be an array")
        .iter()
        .map(|c| c["hex"].as_str().unwrap().to_string())
        .collect()
}

/// File names per batch of `groupedBatches`
pub fn batch_file_names(json: &serde_json::Value) -> Vec<Vec<String>> {
    json["groupedBatches"]
        .as_array()
        .expect("groupedBatches should be an array")
        .iter()
        .map(|batch| {
            batch
                .as_array()
                .unwrap()
                .iter()
                .map(|c| c["fileName"].as_str().unwrap().to_string())
                .collect()
        })
        .collect()
}
