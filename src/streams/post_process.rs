//! Per-record post-processing
//!
//! Report rows nest their identifiers inside `campaign`/`responder`/
//! `supplier`/`push`/`buyer` objects. The sink keys records on flat fields,
//! so each report stream copies the nested IDs to top-level siblings after
//! extraction. A missing nested ID is a shape error, except where the stream
//! documents the nesting as optional.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Sentinel supplier ID for rows without supplier attribution
const NO_SUPPLIER: i64 = 0;

/// Copy `<object>.id` into the record, failing when it is absent
fn require_nested_id(record: &JsonObject, stream: &str, object: &str) -> Result<JsonValue> {
    record
        .get(object)
        .and_then(|v| v.get("id"))
        .filter(|v| !v.is_null())
        .cloned()
        .ok_or_else(|| Error::record_shape(stream, format!("{object}.id")))
}

/// Flatten the full push-report key: campaign, responder, supplier, push
pub fn flatten_push_report(stream: &str, mut record: JsonObject) -> Result<Option<JsonObject>> {
    let campaign_id = require_nested_id(&record, stream, "campaign")?;
    let responder_id = require_nested_id(&record, stream, "responder")?;
    let supplier_id = require_nested_id(&record, stream, "supplier")?;
    let push_id = require_nested_id(&record, stream, "push")?;

    record.insert("campaign_id".to_string(), campaign_id);
    record.insert("responder_id".to_string(), responder_id);
    record.insert("supplier_id".to_string(), supplier_id);
    record.insert("push_id".to_string(), push_id);
    Ok(Some(record))
}

/// Flatten a bulk push-report key
///
/// Bulk sends may not be supplier-attributed (cf. the
/// `include_non_supplier_leads` option); rows without a `supplier` object
/// get the sentinel `supplier_id = 0`.
pub fn flatten_bulk_push_report(
    stream: &str,
    mut record: JsonObject,
) -> Result<Option<JsonObject>> {
    let campaign_id = require_nested_id(&record, stream, "campaign")?;
    let responder_id = require_nested_id(&record, stream, "responder")?;
    let push_id = require_nested_id(&record, stream, "push")?;
    let supplier_id = record
        .get("supplier")
        .and_then(|v| v.get("id"))
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or_else(|| JsonValue::from(NO_SUPPLIER));

    record.insert("campaign_id".to_string(), campaign_id);
    record.insert("responder_id".to_string(), responder_id);
    record.insert("supplier_id".to_string(), supplier_id);
    record.insert("push_id".to_string(), push_id);
    Ok(Some(record))
}

/// Flatten the campaign/supplier key of the supplier report
pub fn flatten_supplier_report(stream: &str, mut record: JsonObject) -> Result<Option<JsonObject>> {
    let campaign_id = require_nested_id(&record, stream, "campaign")?;
    let supplier_id = require_nested_id(&record, stream, "supplier")?;

    record.insert("campaign_id".to_string(), campaign_id);
    record.insert("supplier_id".to_string(), supplier_id);
    Ok(Some(record))
}

/// Flatten the campaign/buyer key of the buyer report
pub fn flatten_buyer_report(stream: &str, mut record: JsonObject) -> Result<Option<JsonObject>> {
    let campaign_id = require_nested_id(&record, stream, "campaign")?;
    let buyer_id = require_nested_id(&record, stream, "buyer")?;

    record.insert("campaign_id".to_string(), campaign_id);
    record.insert("buyer_id".to_string(), buyer_id);
    Ok(Some(record))
}

/// Flatten the campaign key of campaign-scoped reports
pub fn flatten_campaign_report(stream: &str, mut record: JsonObject) -> Result<Option<JsonObject>> {
    let campaign_id = require_nested_id(&record, stream, "campaign")?;

    record.insert("campaign_id".to_string(), campaign_id);
    Ok(Some(record))
}
