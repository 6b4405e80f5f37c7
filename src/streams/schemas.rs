//! Per-stream schema declarations
//!
//! The API types report metrics loosely (counts and money frequently arrive
//! as strings on the push-report endpoints and as numbers on the aggregate
//! report endpoints); the declarations below mirror what the API actually
//! returns rather than normalizing it.

use crate::schema::{JsonSchema, JsonType, SchemaProperty};
use std::collections::BTreeMap;

fn string_col() -> SchemaProperty {
    SchemaProperty::nullable(JsonType::String)
}

fn integer_col() -> SchemaProperty {
    SchemaProperty::nullable(JsonType::Integer)
}

fn number_col() -> SchemaProperty {
    SchemaProperty::nullable(JsonType::Number)
}

fn object(entries: Vec<(&str, SchemaProperty)>) -> SchemaProperty {
    SchemaProperty::object(to_map(entries))
}

fn nullable_object(entries: Vec<(&str, SchemaProperty)>) -> SchemaProperty {
    SchemaProperty::nullable_object(to_map(entries))
}

fn to_map(entries: Vec<(&str, SchemaProperty)>) -> BTreeMap<String, SchemaProperty> {
    entries
        .into_iter()
        .map(|(name, prop)| (name.to_string(), prop))
        .collect()
}

fn schema(title: &str, entries: Vec<(&str, SchemaProperty)>) -> JsonSchema {
    let mut doc = JsonSchema::new().with_title(title);
    for (name, prop) in entries {
        doc.add_property(name, prop);
    }
    doc
}

// ============================================================================
// Shared nested objects
// ============================================================================

fn campaign_object(id_type: JsonType) -> SchemaProperty {
    object(vec![
        ("id", SchemaProperty::nullable(id_type)),
        ("name", string_col()),
        ("reference", string_col()),
    ])
}

fn responder_object() -> SchemaProperty {
    object(vec![("id", integer_col()), ("reference", string_col())])
}

fn supplier_object(id_type: JsonType) -> SchemaProperty {
    object(vec![
        ("id", SchemaProperty::nullable(id_type)),
        ("name", string_col()),
        ("sid", string_col()),
    ])
}

/// Supplier block for rows that may lack supplier attribution
fn optional_supplier_object() -> SchemaProperty {
    nullable_object(vec![
        ("id", integer_col()),
        ("name", string_col()),
        ("sid", string_col()),
    ])
}

fn push_object(with_redirect: bool) -> SchemaProperty {
    let mut entries = vec![("id", integer_col()), ("name", string_col())];
    if with_redirect {
        entries.push(("redirect", string_col()));
    }
    object(entries)
}

fn advertiser_object() -> SchemaProperty {
    object(vec![("id", integer_col()), ("name", string_col())])
}

fn buyer_object() -> SchemaProperty {
    object(vec![
        ("id", string_col()),
        ("name", string_col()),
        ("bid", string_col()),
    ])
}

// ============================================================================
// Report streams
// ============================================================================

fn email_metric_columns() -> Vec<(&'static str, SchemaProperty)> {
    vec![
        ("sent", string_col()),
        ("delivered", string_col()),
        ("opened", string_col()),
        ("clicks", string_col()),
        ("conversions", string_col()),
        ("bounced", string_col()),
        ("unsubscribed", string_col()),
        ("cost", string_col()),
        ("revenue", string_col()),
        ("profit", string_col()),
        ("currency", string_col()),
    ]
}

fn sms_metric_columns() -> Vec<(&'static str, SchemaProperty)> {
    vec![
        ("sent", string_col()),
        ("pending", string_col()),
        ("undelivered", string_col()),
        ("delivered", string_col()),
        ("clicks", string_col()),
        ("conversions", string_col()),
        ("cost", string_col()),
        ("revenue", string_col()),
        ("profit", string_col()),
        ("currency", string_col()),
    ]
}

/// Flattened key columns every push-report stream carries
fn flattened_push_keys() -> Vec<(&'static str, SchemaProperty)> {
    vec![
        ("campaign_id", integer_col()),
        ("responder_id", integer_col()),
        ("supplier_id", integer_col()),
        ("push_id", integer_col()),
    ]
}

fn push_report_schema(
    title: &str,
    with_redirect: bool,
    supplier_optional: bool,
    metrics: Vec<(&'static str, SchemaProperty)>,
) -> JsonSchema {
    let supplier = if supplier_optional {
        optional_supplier_object()
    } else {
        supplier_object(JsonType::Integer)
    };

    let mut entries = vec![
        ("campaign", campaign_object(JsonType::Integer)),
        ("responder", responder_object()),
        ("supplier", supplier),
        ("push", push_object(with_redirect)),
        ("advertiser", advertiser_object()),
    ];
    entries.extend(metrics);
    entries.extend(flattened_push_keys());
    schema(title, entries)
}

pub fn email_reports() -> JsonSchema {
    push_report_schema("email_reports", false, false, email_metric_columns())
}

pub fn sms_reports() -> JsonSchema {
    push_report_schema("sms_reports", true, false, sms_metric_columns())
}

pub fn bulk_email_reports() -> JsonSchema {
    push_report_schema("bulk_email_reports", false, true, email_metric_columns())
}

pub fn bulk_sms_reports() -> JsonSchema {
    push_report_schema("bulk_sms_reports", true, true, sms_metric_columns())
}

pub fn supplier_reports() -> JsonSchema {
    schema(
        "supplier_reports",
        vec![
            ("campaign", campaign_object(JsonType::String)),
            ("supplier", supplier_object(JsonType::String)),
            ("leads", integer_col()),
            ("valid", integer_col()),
            ("invalid", integer_col()),
            ("validCR", number_col()),
            ("pending", integer_col()),
            ("rejected", integer_col()),
            ("payable", integer_col()),
            ("sold", integer_col()),
            ("returns", integer_col()),
            ("payableCR", number_col()),
            ("payout", number_col()),
            ("emailCost", number_col()),
            ("smsCost", number_col()),
            ("validationCost", number_col()),
            ("revenue", number_col()),
            ("profit", number_col()),
            ("eCPL", number_col()),
            ("eRPL", number_col()),
            ("payoutAdjusted", number_col()),
            ("revenueAdjusted", number_col()),
            ("profitAdjusted", number_col()),
            ("eCPLAdjusted", number_col()),
            ("eRPLAdjusted", number_col()),
            ("currency", string_col()),
            ("campaign_id", string_col()),
            ("supplier_id", string_col()),
        ],
    )
}

pub fn buyer_reports() -> JsonSchema {
    schema(
        "buyer_reports",
        vec![
            ("campaign", campaign_object(JsonType::String)),
            ("supplier", supplier_object(JsonType::String)),
            ("buyer", buyer_object()),
            ("posted", integer_col()),
            ("accepted", integer_col()),
            ("sold", integer_col()),
            ("rejected", integer_col()),
            ("approvedCR", number_col()),
            ("returned", integer_col()),
            ("returnedPercent", number_col()),
            ("revenue", number_col()),
            ("RPL", number_col()),
            ("RPS", number_col()),
            ("currency", string_col()),
            ("campaign_id", string_col()),
            ("buyer_id", string_col()),
        ],
    )
}

pub fn campaign_reports() -> JsonSchema {
    schema(
        "campaign_reports",
        vec![
            ("campaign", campaign_object(JsonType::String)),
            ("supplier", supplier_object(JsonType::String)),
            ("date", string_col()),
            ("leads", integer_col()),
            ("valid", integer_col()),
            ("invalid", integer_col()),
            ("pending", integer_col()),
            ("rejections", integer_col()),
            ("payable", integer_col()),
            ("sold", integer_col()),
            ("returns", integer_col()),
            ("payout", number_col()),
            ("emailCost", number_col()),
            ("smsCost", number_col()),
            ("validationCost", number_col()),
            ("revenue", number_col()),
            ("profit", number_col()),
            ("currency", string_col()),
            ("campaign_id", string_col()),
        ],
    )
}

pub fn lead_activity_reports() -> JsonSchema {
    schema(
        "lead_activity_reports",
        vec![
            ("campaign", campaign_object(JsonType::Integer)),
            ("supplier", supplier_object(JsonType::String)),
            ("date", string_col()),
            ("count", integer_col()),
            ("campaign_id", integer_col()),
        ],
    )
}

// ============================================================================
// Master-data streams
// ============================================================================

pub fn campaigns() -> JsonSchema {
    schema(
        "campaigns",
        vec![
            ("id", string_col()),
            ("name", string_col()),
            ("reference", string_col()),
            ("description", string_col()),
            ("currency", string_col()),
            ("country", string_col()),
            ("sms_field", string_col()),
            ("active", string_col()),
            ("sup_visible", string_col()),
            ("archived", string_col()),
        ],
    )
}

pub fn deliveries() -> JsonSchema {
    schema(
        "deliveries",
        vec![
            ("id", string_col()),
            ("reference", string_col()),
            ("status", string_col()),
            ("campaign", campaign_object(JsonType::String)),
            ("deliver_to", string_col()),
            ("remote_system", object(Vec::new())),
        ],
    )
}

pub fn responders() -> JsonSchema {
    let push_entry = object(vec![
        ("push_id", string_col()),
        ("name", string_col()),
        ("type", string_col()),
        ("advertiser", string_col()),
        ("marketing_category", string_col()),
        ("sent", string_col()),
        ("pending", integer_col()),
        ("undelivered", integer_col()),
        ("delivered", integer_col()),
        ("opened", string_col()),
        ("clicks", string_col()),
        ("conversions", string_col()),
        ("bounced", string_col()),
        ("unsubscribed", string_col()),
        ("cost", string_col()),
        ("revenue", string_col()),
        ("profit", number_col()),
        ("currency", string_col()),
        ("active", string_col()),
        ("link", string_col()),
    ]);

    schema(
        "responders",
        vec![
            ("id", string_col()),
            ("reference", string_col()),
            ("status", string_col()),
            ("campaign", campaign_object(JsonType::String)),
            (
                "suppression",
                object(vec![
                    ("id", string_col()),
                    ("name", string_col()),
                    ("reference", string_col()),
                ]),
            ),
            ("supplier", string_col()),
            ("pause_from", string_col()),
            ("pause_to", string_col()),
            ("pushes", SchemaProperty::array(push_entry)),
        ],
    )
}

pub fn buyers() -> JsonSchema {
    schema(
        "buyers",
        vec![
            ("company", string_col()),
            ("street1", string_col()),
            ("towncity", string_col()),
            ("county", string_col()),
            ("country", string_col()),
            ("postcode", string_col()),
            ("phone", string_col()),
            ("external_ref", string_col()),
            ("external_ref_2", string_col()),
            ("status", string_col()),
            ("credit_amount", string_col()),
            ("credit_balance", string_col()),
        ],
    )
}
