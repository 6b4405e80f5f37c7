//! Tests for the record extractor

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_extract_default_data_path() {
    let extractor = RecordExtractor::new("$.data[*]");
    let body = json!({
        "status": "Success",
        "data": [
            {"sent": "10"},
            {"sent": "20"}
        ]
    });

    let records = extractor.extract(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["sent"], "10");
    assert_eq!(records[1]["sent"], "20");
}

#[test]
fn test_extract_preserves_document_order() {
    let extractor = RecordExtractor::new("$.data[*]");
    let body = json!({
        "status": "Success",
        "data": [{"n": 1}, {"n": 2}, {"n": 3}, {"n": 4}]
    });

    let records = extractor.extract(&body).unwrap();
    let order: Vec<i64> = records.iter().map(|r| r["n"].as_i64().unwrap()).collect();
    assert_eq!(order, vec![1, 2, 3, 4]);
}

#[test]
fn test_extract_top_level_array() {
    // The campaigns endpoint returns the array directly, with no envelope
    let extractor = RecordExtractor::new("$[*]");
    let body = json!([
        {"id": "1", "name": "Campaign One"},
        {"id": "2", "name": "Campaign Two"}
    ]);

    let records = extractor.extract(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "1");
}

#[test]
fn test_extract_named_array() {
    let extractor = RecordExtractor::new("$.deliveries[*]");
    let body = json!({
        "status": "Success",
        "deliveries": [{"id": "d1"}]
    });

    let records = extractor.extract(&body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "d1");
}

#[test]
fn test_extract_nested_array_path() {
    let extractor = RecordExtractor::new("$.result.rows[*]");
    let body = json!({
        "status": "Success",
        "result": {"rows": [{"id": 1}, {"id": 2}]}
    });

    let records = extractor.extract(&body).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_extract_failure_status_yields_empty_page() {
    let extractor = RecordExtractor::new("$.data[*]");
    // Record-bearing content must be ignored when the status signals failure
    let body = json!({
        "status": "Error",
        "message": "Invalid API key",
        "data": [{"sent": "10"}]
    });

    let records = extractor.extract(&body).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_extract_failure_status_without_message() {
    let extractor = RecordExtractor::new("$.data[*]");
    let body = json!({"status": "Failed"});

    let records = extractor.extract(&body).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_extract_missing_path_yields_empty_page() {
    let extractor = RecordExtractor::new("$.data[*]");
    let body = json!({"status": "Success"});

    let records = extractor.extract(&body).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_extract_missing_status_is_not_failure() {
    // A bare array body has no status field and must not be treated as a
    // failed response
    let extractor = RecordExtractor::new("$[*]");
    let body = json!([{"id": "1"}]);

    let records = extractor.extract(&body).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_extract_empty_data_array() {
    let extractor = RecordExtractor::new("$.data[*]");
    let body = json!({"status": "Success", "data": []});

    let records = extractor.extract(&body).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_simple_path_without_wildcard() {
    let extractor = RecordExtractor::new("$.result.summary");
    let body = json!({
        "status": "Success",
        "result": {"summary": {"total": 5}}
    });

    let records = extractor.extract(&body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["total"], 5);
}

#[test]
fn test_records_path_accessor() {
    let extractor = RecordExtractor::new("$.buyers[*]");
    assert_eq!(extractor.records_path(), "$.buyers[*]");
}
