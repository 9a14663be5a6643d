//! Custom assertions

use serde_json::Value;

/// Assert the standard error envelope with the given code
pub fn assert_error_body(body: &Value, code: &str) {
    assert_eq!(body["success"], Value::Bool(false), "body: {}", body);
    assert_eq!(body["error"]["code"], code, "body: {}", body);
    assert!(
        body["error"]["message"].is_string(),
        "missing message: {}",
        body
    );
}
