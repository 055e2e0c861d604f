//! Unit tests for the API client: payload serialization and server error
//! formatting. Network behavior is exercised against a live server, not
//! here.

use crate::api::{format_api_errors, ApiClient};
use crate::model::{NewApplicant, StagePatch};
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_client_construction() {
    let client = ApiClient::new("http://localhost:8000", None);
    assert!(client.is_ok());
}

#[test]
fn test_configured_csrf_token_takes_precedence() {
    let client = ApiClient::new("http://localhost:8000", Some("tok123".to_string())).unwrap();
    assert_eq!(client.csrf_token(), Some("tok123".to_string()));
}

#[test]
fn test_no_csrf_token_without_cookie_or_config() {
    let client = ApiClient::new("http://localhost:8000", None).unwrap();
    assert_eq!(client.csrf_token(), None);
}

#[test]
fn test_new_applicant_serialization() {
    let payload = NewApplicant {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "555-0100".to_string(),
        source: "LinkedIn".to_string(),
        tags: "rust, senior".to_string(),
        current_stage: "Submitted".to_string(),
    };

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["email"], "jane@example.com");
    assert_eq!(json["current_stage"], "Submitted");
    assert_eq!(json["tags"], "rust, senior");
}

#[test]
fn test_stage_patch_serialization_carries_exactly_the_patch_fields() {
    let patch = StagePatch {
        current_stage: "Hired".to_string(),
        comments_ta: "great".to_string(),
        comments_initial_call: String::new(),
        comments_evaluation: "ship it".to_string(),
    };

    let json = serde_json::to_value(&patch).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(json["current_stage"], "Hired");
    assert_eq!(json["comments_initial_call"], "");
}

#[test]
fn test_format_api_errors_plain_string() {
    let body = json!("something broke");
    assert_eq!(
        format_api_errors(&body, StatusCode::BAD_REQUEST),
        "something broke"
    );
}

#[test]
fn test_format_api_errors_detail_object() {
    let body = json!({"detail": "Not found."});
    assert_eq!(format_api_errors(&body, StatusCode::NOT_FOUND), "Not found.");
}

#[test]
fn test_format_api_errors_field_arrays() {
    let body = json!({
        "email": ["Enter a valid email address.", "This field is required."],
        "name": ["This field is required."],
    });
    let message = format_api_errors(&body, StatusCode::BAD_REQUEST);
    assert!(message.contains("email: Enter a valid email address., This field is required."));
    assert!(message.contains("name: This field is required."));
}

#[test]
fn test_format_api_errors_falls_back_to_status() {
    assert_eq!(
        format_api_errors(&serde_json::Value::Null, StatusCode::BAD_GATEWAY),
        "HTTP 502"
    );
    assert_eq!(
        format_api_errors(&json!({}), StatusCode::INTERNAL_SERVER_ERROR),
        "HTTP 500"
    );
}
