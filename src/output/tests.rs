//! Tests for the output writer

use super::*;
use crate::streams;
use crate::types::JsonObject;
use pretty_assertions::assert_eq;
use serde_json::json;

fn record_fixture() -> JsonObject {
    json!({"id": "1", "name": "Campaign One"})
        .as_object()
        .cloned()
        .unwrap()
}

#[test]
fn test_write_record_as_json_line() {
    let mut buffer = Vec::new();
    let mut writer = MessageWriter::new(&mut buffer);

    writer
        .write(&Message::record("campaigns", record_fixture()))
        .unwrap();

    let line = String::from_utf8(buffer).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(parsed["type"], "RECORD");
    assert_eq!(parsed["stream"], "campaigns");
    assert_eq!(parsed["record"]["name"], "Campaign One");
    assert!(parsed["time_extracted"].is_string());
}

#[test]
fn test_write_schema_message() {
    let mut buffer = Vec::new();
    let mut writer = MessageWriter::new(&mut buffer);

    let descriptor = streams::find("email_reports").unwrap();
    writer.write(&Message::schema(descriptor)).unwrap();

    let line = String::from_utf8(buffer).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(parsed["type"], "SCHEMA");
    assert_eq!(parsed["stream"], "email_reports");
    assert_eq!(
        parsed["key_properties"],
        json!(["campaign_id", "responder_id", "supplier_id", "push_id"])
    );
    assert_eq!(parsed["schema"]["type"], "object");
    assert!(parsed["schema"]["properties"]["campaign_id"].is_object());
}

#[test]
fn test_one_message_per_line() {
    let mut buffer = Vec::new();
    let mut writer = MessageWriter::new(&mut buffer);

    writer
        .write(&Message::record("campaigns", record_fixture()))
        .unwrap();
    writer
        .write(&Message::record("campaigns", record_fixture()))
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.trim().lines().count(), 2);
    for line in text.trim().lines() {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(parsed["type"], "RECORD");
    }
}

#[test]
fn test_pretty_format() {
    let mut buffer = Vec::new();
    let mut writer = MessageWriter::pretty(&mut buffer);

    let descriptor = streams::find("buyers").unwrap();
    writer.write(&Message::schema(descriptor)).unwrap();
    writer
        .write(&Message::record("buyers", record_fixture()))
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("SCHEMA  buyers"));
    assert!(lines[0].contains("company"));
    assert!(lines[1].starts_with("RECORD  buyers:"));
}
