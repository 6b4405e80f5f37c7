//! Tests for the stream descriptors

use super::*;
use crate::error::Error;
use crate::types::{JsonObject, JsonValue};
use pretty_assertions::assert_eq;
use serde_json::json;

fn as_object(value: JsonValue) -> JsonObject {
    value.as_object().cloned().expect("expected a JSON object")
}

#[test]
fn test_registry_contains_all_streams() {
    let names: Vec<&str> = all().iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            "email_reports",
            "sms_reports",
            "bulk_email_reports",
            "bulk_sms_reports",
            "supplier_reports",
            "buyer_reports",
            "campaign_reports",
            "lead_activity_reports",
            "campaigns",
            "deliveries",
            "responders",
            "buyers",
        ]
    );
}

#[test]
fn test_find_stream() {
    let stream = find("email_reports").unwrap();
    assert_eq!(stream.path, "/reports/email");
    assert_eq!(stream.records_path, "$.data[*]");
    assert!(stream.paginates);

    assert!(find("unknown_stream").is_none());
}

#[test]
fn test_campaigns_is_non_paginating_with_bare_array() {
    let stream = find("campaigns").unwrap();
    assert!(!stream.paginates);
    assert_eq!(stream.records_path, "$[*]");

    // Its paginator ignores any next-page indicator
    let paginator = stream.paginator();
    assert!(paginator
        .next_token(&json!({"next_page": {"page": 2}}))
        .is_none());
}

#[test]
fn test_report_streams_share_report_profile() {
    for name in [
        "email_reports",
        "sms_reports",
        "bulk_email_reports",
        "bulk_sms_reports",
        "supplier_reports",
        "buyer_reports",
        "campaign_reports",
        "lead_activity_reports",
    ] {
        let stream = find(name).unwrap();
        assert!(stream.profile.report_window, "{name} should send the window");
    }

    for name in ["campaigns", "deliveries", "responders", "buyers"] {
        let stream = find(name).unwrap();
        assert!(!stream.profile.report_window, "{name} is master data");
    }
}

#[test]
fn test_primary_keys_are_flattened_fields() {
    for stream in all() {
        for key in stream.primary_key {
            assert!(
                !key.contains('.'),
                "stream {} declares dotted key {key}",
                stream.name
            );
        }
    }
}

#[test]
fn test_schema_covers_primary_key_fields() {
    for stream in all() {
        let schema = stream.schema();
        for key in stream.primary_key {
            assert!(
                schema.get_property(key).is_some(),
                "stream {} schema is missing key field {key}",
                stream.name
            );
        }
    }
}

#[test]
fn test_email_reports_post_process_flattens_ids() {
    let stream = find("email_reports").unwrap();
    let record = as_object(json!({
        "campaign": {"id": 7, "name": "Main"},
        "responder": {"id": 3},
        "supplier": {"id": 9, "sid": "S9"},
        "push": {"id": 1, "name": "Push One"},
        "sent": "100"
    }));

    let processed = stream.post_process(record).unwrap().unwrap();
    assert_eq!(processed["campaign_id"], json!(7));
    assert_eq!(processed["responder_id"], json!(3));
    assert_eq!(processed["supplier_id"], json!(9));
    assert_eq!(processed["push_id"], json!(1));
    // Original nested objects survive
    assert_eq!(processed["campaign"]["name"], json!("Main"));
}

#[test]
fn test_email_reports_post_process_fails_on_missing_nested_id() {
    let stream = find("email_reports").unwrap();
    let record = as_object(json!({
        "campaign": {"id": 7},
        "responder": {"id": 3},
        "push": {"id": 1}
    }));

    let err = stream.post_process(record).unwrap_err();
    assert!(matches!(
        err,
        Error::RecordShape { ref stream, ref field }
            if stream == "email_reports" && field == "supplier.id"
    ));
}

#[test]
fn test_bulk_reports_substitute_supplier_sentinel() {
    let stream = find("bulk_email_reports").unwrap();
    // No supplier attribution on this row
    let record = as_object(json!({
        "campaign": {"id": 7},
        "responder": {"id": 3},
        "push": {"id": 1}
    }));

    let processed = stream.post_process(record).unwrap().unwrap();
    assert_eq!(processed["supplier_id"], json!(0));
    assert_eq!(processed["campaign_id"], json!(7));
}

#[test]
fn test_bulk_reports_use_real_supplier_when_present() {
    let stream = find("bulk_sms_reports").unwrap();
    let record = as_object(json!({
        "campaign": {"id": 7},
        "responder": {"id": 3},
        "supplier": {"id": 42},
        "push": {"id": 1}
    }));

    let processed = stream.post_process(record).unwrap().unwrap();
    assert_eq!(processed["supplier_id"], json!(42));
}

#[test]
fn test_bulk_reports_still_require_campaign() {
    let stream = find("bulk_email_reports").unwrap();
    let record = as_object(json!({
        "responder": {"id": 3},
        "push": {"id": 1}
    }));

    let err = stream.post_process(record).unwrap_err();
    assert!(matches!(err, Error::RecordShape { ref field, .. } if field == "campaign.id"));
}

#[test]
fn test_supplier_report_post_process() {
    let stream = find("supplier_reports").unwrap();
    let record = as_object(json!({
        "campaign": {"id": "12"},
        "supplier": {"id": "8"},
        "leads": 40
    }));

    let processed = stream.post_process(record).unwrap().unwrap();
    assert_eq!(processed["campaign_id"], json!("12"));
    assert_eq!(processed["supplier_id"], json!("8"));
}

#[test]
fn test_buyer_report_post_process() {
    let stream = find("buyer_reports").unwrap();
    let record = as_object(json!({
        "campaign": {"id": "12"},
        "buyer": {"id": "b4"},
        "posted": 10
    }));

    let processed = stream.post_process(record).unwrap().unwrap();
    assert_eq!(processed["campaign_id"], json!("12"));
    assert_eq!(processed["buyer_id"], json!("b4"));
}

#[test]
fn test_campaign_report_post_process() {
    let stream = find("campaign_reports").unwrap();
    let record = as_object(json!({
        "campaign": {"id": "5"},
        "date": "2024-02-01",
        "leads": 3
    }));

    let processed = stream.post_process(record).unwrap().unwrap();
    assert_eq!(processed["campaign_id"], json!("5"));
}

#[test]
fn test_master_data_streams_pass_records_through() {
    let stream = find("campaigns").unwrap();
    let record = as_object(json!({"id": "1", "name": "Campaign One"}));

    let processed = stream.post_process(record.clone()).unwrap().unwrap();
    assert_eq!(processed, record);
}

#[test]
fn test_null_nested_id_is_a_shape_error() {
    let stream = find("email_reports").unwrap();
    let record = as_object(json!({
        "campaign": {"id": null},
        "responder": {"id": 3},
        "supplier": {"id": 9},
        "push": {"id": 1}
    }));

    let err = stream.post_process(record).unwrap_err();
    assert!(matches!(err, Error::RecordShape { ref field, .. } if field == "campaign.id"));
}

#[test]
fn test_key_properties_owned() {
    let stream = find("buyers").unwrap();
    assert_eq!(stream.key_properties(), vec!["company".to_string()]);
}
