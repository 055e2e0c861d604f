//! Unit tests for listing envelope normalization.

use crate::store::records_from_value;
use serde_json::json;

#[test]
fn test_bare_array_listing() {
    let value = json!([
        {"id": 1, "name": "A", "email": "a@x.com"},
        {"id": 2, "name": "B", "email": "b@x.com"},
    ]);
    let records = records_from_value(&value);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].ident(), 1);
}

#[test]
fn test_results_envelope_listing() {
    let value = json!({
        "count": 2,
        "results": [
            {"id": 1, "name": "A", "email": "a@x.com"},
            {"id": 2, "name": "B", "email": "b@x.com"},
        ],
    });
    let records = records_from_value(&value);
    assert_eq!(records.len(), 2);
}

#[test]
fn test_unexpected_shapes_normalize_to_empty() {
    assert!(records_from_value(&json!({"detail": "throttled"})).is_empty());
    assert!(records_from_value(&json!("nope")).is_empty());
    assert!(records_from_value(&json!(42)).is_empty());
    assert!(records_from_value(&json!(null)).is_empty());
}

#[test]
fn test_malformed_record_is_skipped_not_fatal() {
    let value = json!([
        {"id": 1, "name": "A", "email": "a@x.com"},
        {"id": "not-a-number", "name": 17},
        {"id": 3, "name": "C", "email": "c@x.com"},
    ]);
    let records = records_from_value(&value);
    let ids: Vec<i64> = records.iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_loose_shapes_survive_the_listing_path() {
    // Tags as a string in one record and a list in another normalize to
    // the same canonical shape.
    let value = json!([
        {"id": 1, "name": "A", "email": "a@x.com", "tags": "x, y"},
        {"id": 2, "name": "B", "email": "b@x.com", "tags": ["x", "y"]},
    ]);
    let records = records_from_value(&value);
    assert_eq!(records[0].tags, records[1].tags);
}
