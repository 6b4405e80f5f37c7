//! Tests for the parameter builder

use super::*;
use crate::config::ConnectorConfig;
use crate::pagination::PageToken;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn config(json: &str) -> ConnectorConfig {
    ConnectorConfig::from_json_str(json).unwrap()
}

fn base_config() -> ConnectorConfig {
    config(r#"{"api_key": "secret", "start_date": "2024-01-01T00:00:00Z"}"#)
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
}

#[test]
fn test_api_key_always_present() {
    let params = build(&base_config(), ParamProfile::default(), None, now());
    assert_eq!(params.get("key"), Some(&"secret".to_string()));
}

#[test]
fn test_master_data_profile_omits_window() {
    let params = build(&base_config(), ParamProfile::default(), None, now());
    assert!(!params.contains_key("from"));
    assert!(!params.contains_key("to"));
    assert!(!params.contains_key("campaignId"));
}

#[test]
fn test_report_window_formats_timestamps() {
    let params = build(&base_config(), ParamProfile::report(), None, now());
    assert_eq!(params.get("from"), Some(&"2024-01-01T00:00:00Z".to_string()));
    // No end_date configured: `to` falls back to the supplied clock
    assert_eq!(params.get("to"), Some(&"2024-03-01T12:30:45Z".to_string()));
}

#[test]
fn test_report_window_explicit_end_date() {
    let cfg = config(
        r#"{"api_key": "k", "start_date": "2024-01-01T00:00:00Z",
            "end_date": "2024-02-01T06:00:00Z"}"#,
    );
    let params = build(&cfg, ParamProfile::report(), None, now());
    assert_eq!(params.get("to"), Some(&"2024-02-01T06:00:00Z".to_string()));
}

#[test]
fn test_from_never_after_to() {
    let cfg = config(r#"{"api_key": "k", "start_date": "2024-03-01T12:30:45Z"}"#);
    let params = build(&cfg, ParamProfile::report(), None, now());
    // start_date equal to the current instant: from == to
    assert_eq!(params.get("from"), params.get("to"));
}

#[test]
fn test_date_preset_replaces_window() {
    let cfg = config(
        r#"{"api_key": "k", "start_date": "2024-01-01",
            "date_preset": "LAST_30_DAYS"}"#,
    );
    let params = build(&cfg, ParamProfile::report(), None, now());
    assert_eq!(params.get("datePreset"), Some(&"LAST_30_DAYS".to_string()));
    assert!(!params.contains_key("from"));
    assert!(!params.contains_key("to"));
}

#[test]
fn test_campaign_filter_defaults_to_all() {
    let params = build(&base_config(), ParamProfile::report(), None, now());
    assert_eq!(params.get("campaignId"), Some(&"all".to_string()));
}

#[test]
fn test_campaign_filter_joined() {
    let cfg = config(
        r#"{"api_key": "k", "start_date": "2024-01-01",
            "campaign_ids": ["7", "12", "44"]}"#,
    );
    let params = build(&cfg, ParamProfile::report(), None, now());
    assert_eq!(params.get("campaignId"), Some(&"7,12,44".to_string()));
}

#[test]
fn test_optional_id_filters() {
    let cfg = config(
        r#"{"api_key": "k", "start_date": "2024-01-01",
            "supplier_ids": ["3"], "responder_ids": ["5", "6"], "buyer_ids": ["9"]}"#,
    );
    let params = build(&cfg, ParamProfile::report(), None, now());
    assert_eq!(params.get("supplierId"), Some(&"3".to_string()));
    assert_eq!(params.get("responderId"), Some(&"5,6".to_string()));
    assert_eq!(params.get("buyerId"), Some(&"9".to_string()));
}

#[test]
fn test_empty_id_filters_omitted() {
    let params = build(&base_config(), ParamProfile::report(), None, now());
    assert!(!params.contains_key("supplierId"));
    assert!(!params.contains_key("responderId"));
    assert!(!params.contains_key("buyerId"));
}

#[test_case("debug", "debug" ; "debug flag")]
#[test_case("include_non_supplier_leads", "includeNonSupplierLeads" ; "non supplier leads")]
#[test_case("lead_type_api", "leadTypeApi" ; "lead type api")]
#[test_case("lead_type_import", "leadTypeImport" ; "lead type import")]
#[test_case("show_supplier", "showSupplier" ; "show supplier")]
#[test_case("show_buyer", "showBuyer" ; "show buyer")]
#[test_case("show_ssid", "showSSID" ; "show ssid")]
#[test_case("show_campaign", "showCampaign" ; "show campaign")]
#[test_case("show_data", "showData" ; "show data")]
fn test_flags_serialize_as_yes_no(option: &str, param: &str) {
    let cfg = config(&format!(
        r#"{{"api_key": "k", "start_date": "2024-01-01", "{option}": true}}"#
    ));
    let params = build(&cfg, ParamProfile::report(), None, now());
    assert_eq!(params.get(param), Some(&"Yes".to_string()));

    let cfg = config(&format!(
        r#"{{"api_key": "k", "start_date": "2024-01-01", "{option}": false}}"#
    ));
    let params = build(&cfg, ParamProfile::report(), None, now());
    assert_eq!(params.get(param), Some(&"No".to_string()));
}

#[test]
fn test_unset_flags_omitted() {
    let params = build(&base_config(), ParamProfile::report(), None, now());
    assert!(!params.contains_key("debug"));
    assert!(!params.contains_key("showSupplier"));
}

#[test]
fn test_group_by_sent_verbatim() {
    let cfg = config(
        r#"{"api_key": "k", "start_date": "2024-01-01", "group_by": "supplier"}"#,
    );
    let params = build(&cfg, ParamProfile::report(), None, now());
    assert_eq!(params.get("groupBy"), Some(&"supplier".to_string()));
}

#[test_case(StatusFilter::Campaign, "campaign_status", "ACTIVE" ; "campaigns")]
#[test_case(StatusFilter::Delivery, "delivery_status", "PAUSED" ; "deliveries")]
#[test_case(StatusFilter::Buyer, "buyer_status", "LIVE" ; "buyers")]
fn test_status_filters(filter: StatusFilter, option: &str, value: &str) {
    let cfg = config(&format!(
        r#"{{"api_key": "k", "start_date": "2024-01-01", "{option}": "{value}"}}"#
    ));
    let params = build(&cfg, ParamProfile::master_data(filter), None, now());
    assert_eq!(params.get("status"), Some(&value.to_string()));
}

#[test]
fn test_status_filter_absent_when_unconfigured() {
    let params = build(
        &base_config(),
        ParamProfile::master_data(StatusFilter::Campaign),
        None,
        now(),
    );
    assert!(!params.contains_key("status"));
}

#[test]
fn test_token_merged_into_params() {
    let mut token = PageToken::new();
    token.insert("page".to_string(), "3".to_string());

    let params = build(&base_config(), ParamProfile::report(), Some(token), now());
    assert_eq!(params.get("page"), Some(&"3".to_string()));
    // Base parameters survive the merge
    assert_eq!(params.get("key"), Some(&"secret".to_string()));
}

#[test]
fn test_token_overrides_base_params() {
    let mut token = PageToken::new();
    token.insert("campaignId".to_string(), "override".to_string());

    let params = build(&base_config(), ParamProfile::report(), Some(token), now());
    assert_eq!(params.get("campaignId"), Some(&"override".to_string()));
}

#[test]
fn test_build_is_deterministic() {
    let cfg = config(
        r#"{"api_key": "k", "start_date": "2024-01-01", "campaign_ids": ["7"],
            "show_supplier": true}"#,
    );
    let first = build(&cfg, ParamProfile::report(), None, now());
    let second = build(&cfg, ParamProfile::report(), None, now());
    assert_eq!(first, second);
}
