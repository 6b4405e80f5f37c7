//! Parameter builder implementation

use crate::config::ConnectorConfig;
use crate::pagination::PageToken;
use crate::types::StringMap;
use chrono::{DateTime, Utc};

/// Timestamp format the API requires: second-precision UTC
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Sentinel the API expects when no campaign filter is given
const ALL_CAMPAIGNS: &str = "all";

/// Which optional parameter families a stream sends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamProfile {
    /// Date window, ID filters and display flags (report endpoints)
    pub report_window: bool,
    /// Status filter for a master-data endpoint
    pub status_filter: Option<StatusFilter>,
}

impl ParamProfile {
    /// Profile for report endpoints
    pub fn report() -> Self {
        Self {
            report_window: true,
            status_filter: None,
        }
    }

    /// Profile for master-data endpoints with a status filter
    pub fn master_data(filter: StatusFilter) -> Self {
        Self {
            report_window: false,
            status_filter: Some(filter),
        }
    }
}

/// Which configured status option feeds the endpoint's `status` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Campaign,
    Delivery,
    Buyer,
}

/// Build the query parameters for one request
///
/// Pure function of its inputs: the wall clock is passed in as `now` so the
/// implicit `to` bound is deterministic. Pagination token entries are merged
/// last and may override base parameters.
pub fn build(
    config: &ConnectorConfig,
    profile: ParamProfile,
    token: Option<PageToken>,
    now: DateTime<Utc>,
) -> StringMap {
    let mut params = StringMap::new();
    params.insert("key".to_string(), config.api_key.clone());

    if profile.report_window {
        add_date_window(&mut params, config, now);
        add_id_filters(&mut params, config);
        add_report_flags(&mut params, config);
    }

    if let Some(filter) = profile.status_filter {
        let value = match filter {
            StatusFilter::Campaign => &config.campaign_status,
            StatusFilter::Delivery => &config.delivery_status,
            StatusFilter::Buyer => &config.buyer_status,
        };
        if let Some(status) = value.as_deref().filter(|s| !s.is_empty()) {
            params.insert("status".to_string(), status.to_string());
        }
    }

    if let Some(token) = token {
        params.extend(token);
    }

    params
}

/// Add the report date window: a named preset, or explicit from/to bounds
fn add_date_window(params: &mut StringMap, config: &ConnectorConfig, now: DateTime<Utc>) {
    if let Some(preset) = config.date_preset.as_deref().filter(|p| !p.is_empty()) {
        params.insert("datePreset".to_string(), preset.to_string());
        return;
    }

    params.insert("from".to_string(), format_timestamp(config.start_date));
    let to = config.end_date.unwrap_or(now);
    params.insert("to".to_string(), format_timestamp(to));
}

/// Add ID filters; the campaign filter is required by the API, so the `all`
/// sentinel is substituted when none is configured
fn add_id_filters(params: &mut StringMap, config: &ConnectorConfig) {
    if config.campaign_ids.is_empty() {
        params.insert("campaignId".to_string(), ALL_CAMPAIGNS.to_string());
    } else {
        params.insert("campaignId".to_string(), config.campaign_ids.join(","));
    }

    if !config.supplier_ids.is_empty() {
        params.insert("supplierId".to_string(), config.supplier_ids.join(","));
    }
    if !config.responder_ids.is_empty() {
        params.insert("responderId".to_string(), config.responder_ids.join(","));
    }
    if !config.buyer_ids.is_empty() {
        params.insert("buyerId".to_string(), config.buyer_ids.join(","));
    }
}

/// Add report display flags and grouping
fn add_report_flags(params: &mut StringMap, config: &ConnectorConfig) {
    if let Some(group_by) = config.group_by.as_deref().filter(|g| !g.is_empty()) {
        params.insert("groupBy".to_string(), group_by.to_string());
    }

    let flags = [
        ("debug", config.debug),
        ("includeNonSupplierLeads", config.include_non_supplier_leads),
        ("leadTypeApi", config.lead_type_api),
        ("leadTypeImport", config.lead_type_import),
        ("showSupplier", config.show_supplier),
        ("showBuyer", config.show_buyer),
        ("showSSID", config.show_ssid),
        ("showCampaign", config.show_campaign),
        ("showData", config.show_data),
    ];
    for (name, value) in flags {
        if let Some(flag) = value {
            params.insert(name.to_string(), yes_no(flag).to_string());
        }
    }
}

/// Render a timestamp the way the API expects it
fn format_timestamp(value: DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// The API takes literal Yes/No strings, not booleans
fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
