//! Unit tests for record deserialization and shape normalization.

use crate::model::{parse_timestamp, ApplicantRecord, DEFAULT_STAGE};

fn parse(json: &str) -> ApplicantRecord {
    serde_json::from_str(json).expect("record should deserialize")
}

#[test]
fn test_tags_from_comma_separated_string() {
    let record = parse(r#"{"id": 1, "name": "A", "email": "a@x.com", "tags": "rust, backend ,  senior"}"#);
    assert_eq!(record.tags, vec!["rust", "backend", "senior"]);
}

#[test]
fn test_tags_from_sequence() {
    let record = parse(r#"{"id": 1, "name": "A", "email": "a@x.com", "tags": [" rust ", "", "frontend"]}"#);
    assert_eq!(record.tags, vec!["rust", "frontend"]);
}

#[test]
fn test_tags_missing_or_empty() {
    let record = parse(r#"{"id": 1, "name": "A", "email": "a@x.com"}"#);
    assert!(record.tags.is_empty());

    let record = parse(r#"{"id": 1, "name": "A", "email": "a@x.com", "tags": ""}"#);
    assert!(record.tags.is_empty());
}

#[test]
fn test_interview_dates_from_sequence() {
    let record = parse(
        r#"{"id": 1, "name": "A", "email": "a@x.com", "interview_dates": ["2024-01-15", "2024-02-01"]}"#,
    );
    assert_eq!(record.interview_dates, vec!["2024-01-15", "2024-02-01"]);
}

#[test]
fn test_interview_dates_from_json_encoded_string() {
    let record = parse(
        r#"{"id": 1, "name": "A", "email": "a@x.com", "interview_dates": "[\"2024-01-15\", \"2024-02-01\"]"}"#,
    );
    assert_eq!(record.interview_dates, vec!["2024-01-15", "2024-02-01"]);
}

#[test]
fn test_interview_dates_from_bare_string() {
    let record =
        parse(r#"{"id": 1, "name": "A", "email": "a@x.com", "interview_dates": "2024-01-15"}"#);
    assert_eq!(record.interview_dates, vec!["2024-01-15"]);
}

#[test]
fn test_ident_prefers_applicant_id() {
    let record = parse(r#"{"id": 7, "applicant_id": 42, "name": "A", "email": "a@x.com"}"#);
    assert_eq!(record.ident(), 42);

    let record = parse(r#"{"id": 7, "name": "A", "email": "a@x.com"}"#);
    assert_eq!(record.ident(), 7);
}

#[test]
fn test_missing_stage_defaults_to_submitted() {
    let record = parse(r#"{"id": 1, "name": "A", "email": "a@x.com"}"#);
    assert_eq!(record.current_stage, DEFAULT_STAGE);
}

#[test]
fn test_missing_name_becomes_empty_not_error() {
    // A record violating the name/email contract still deserializes; the
    // empty string simply never matches a non-empty search term.
    let record = parse(r#"{"id": 1, "email": "a@x.com"}"#);
    assert_eq!(record.name, "");
}

#[test]
fn test_last_update_prefers_status_timestamp() {
    let record = parse(
        r#"{"id": 1, "name": "A", "email": "a@x.com",
            "updated_at": "2024-01-01T00:00:00Z",
            "last_status_update": "2024-02-02T00:00:00Z"}"#,
    );
    assert_eq!(record.last_update(), Some("2024-02-02T00:00:00Z"));

    let record = parse(
        r#"{"id": 1, "name": "A", "email": "a@x.com", "updated_at": "2024-01-01T00:00:00Z"}"#,
    );
    assert_eq!(record.last_update(), Some("2024-01-01T00:00:00Z"));
}

#[test]
fn test_parse_timestamp_rfc3339() {
    assert_eq!(parse_timestamp("1970-01-01T00:00:00Z"), Some(0));
    assert_eq!(parse_timestamp("1970-01-01T00:01:00+00:00"), Some(60));
    assert!(parse_timestamp("2024-06-01T12:00:00.123456Z").is_some());
}

#[test]
fn test_parse_timestamp_naive_and_date_only() {
    assert_eq!(parse_timestamp("1970-01-01T00:00:30"), Some(30));
    assert_eq!(parse_timestamp("1970-01-02"), Some(86_400));
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert_eq!(parse_timestamp("not a date"), None);
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("  "), None);
}

#[test]
fn test_timestamp_ordering_matches_parse() {
    let early = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
    let late = parse_timestamp("2024-06-01T00:00:00Z").unwrap();
    assert!(early < late);
}
