//! Stream descriptor type and registry

use super::{post_process, schemas};
use crate::error::Result;
use crate::pagination::{NextPagePaginator, NoPaginator, Paginator};
use crate::params::{ParamProfile, StatusFilter};
use crate::schema::JsonSchema;
use crate::types::JsonObject;
use once_cell::sync::Lazy;

/// Per-record transform applied after extraction, before emission
///
/// Returning `Ok(None)` drops the record from output.
pub type PostProcessFn = fn(&str, JsonObject) -> Result<Option<JsonObject>>;

/// Immutable description of one API endpoint as a stream
pub struct StreamDescriptor {
    /// Stream name
    pub name: &'static str,
    /// API endpoint path, relative to the base URL
    pub path: &'static str,
    /// Primary key fields, in order
    pub primary_key: &'static [&'static str],
    /// Path expression locating records in a response body
    pub records_path: &'static str,
    /// Whether responses carry a next-page indicator
    pub paginates: bool,
    /// Which optional parameter families this stream sends
    pub profile: ParamProfile,
    schema_fn: fn() -> JsonSchema,
    post_process_fn: Option<PostProcessFn>,
}

impl StreamDescriptor {
    /// The stream's record schema
    pub fn schema(&self) -> JsonSchema {
        (self.schema_fn)()
    }

    /// Primary key fields as owned strings
    pub fn key_properties(&self) -> Vec<String> {
        self.primary_key.iter().map(|k| (*k).to_string()).collect()
    }

    /// A fresh paginator for one sync of this stream
    pub fn paginator(&self) -> Box<dyn Paginator> {
        if self.paginates {
            Box::new(NextPagePaginator::default())
        } else {
            Box::new(NoPaginator)
        }
    }

    /// Apply the stream's post-processing to one record
    pub fn post_process(&self, record: JsonObject) -> Result<Option<JsonObject>> {
        match self.post_process_fn {
            Some(transform) => transform(self.name, record),
            None => Ok(Some(record)),
        }
    }
}

impl std::fmt::Debug for StreamDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamDescriptor")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("primary_key", &self.primary_key)
            .field("records_path", &self.records_path)
            .field("paginates", &self.paginates)
            .finish_non_exhaustive()
    }
}

/// Default record path: most endpoints wrap records in a `data` array
const DATA_PATH: &str = "$.data[*]";

static REGISTRY: Lazy<Vec<StreamDescriptor>> = Lazy::new(|| {
    vec![
        // ====================================================================
        // Report streams
        // ====================================================================
        StreamDescriptor {
            name: "email_reports",
            path: "/reports/email",
            primary_key: &["campaign_id", "responder_id", "supplier_id", "push_id"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::report(),
            schema_fn: schemas::email_reports,
            post_process_fn: Some(post_process::flatten_push_report),
        },
        StreamDescriptor {
            name: "sms_reports",
            path: "/reports/sms",
            primary_key: &["campaign_id", "responder_id", "supplier_id", "push_id"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::report(),
            schema_fn: schemas::sms_reports,
            post_process_fn: Some(post_process::flatten_push_report),
        },
        StreamDescriptor {
            name: "bulk_email_reports",
            path: "/reports/bulkemail",
            primary_key: &["campaign_id", "responder_id", "supplier_id", "push_id"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::report(),
            schema_fn: schemas::bulk_email_reports,
            post_process_fn: Some(post_process::flatten_bulk_push_report),
        },
        StreamDescriptor {
            name: "bulk_sms_reports",
            path: "/reports/bulksms",
            primary_key: &["campaign_id", "responder_id", "supplier_id", "push_id"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::report(),
            schema_fn: schemas::bulk_sms_reports,
            post_process_fn: Some(post_process::flatten_bulk_push_report),
        },
        StreamDescriptor {
            name: "supplier_reports",
            path: "/reports/supplier",
            primary_key: &["campaign_id", "supplier_id"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::report(),
            schema_fn: schemas::supplier_reports,
            post_process_fn: Some(post_process::flatten_supplier_report),
        },
        StreamDescriptor {
            name: "buyer_reports",
            path: "/reports/buyer",
            primary_key: &["campaign_id", "buyer_id"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::report(),
            schema_fn: schemas::buyer_reports,
            post_process_fn: Some(post_process::flatten_buyer_report),
        },
        StreamDescriptor {
            name: "campaign_reports",
            path: "/reports/campaign",
            primary_key: &["campaign_id", "date"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::report(),
            schema_fn: schemas::campaign_reports,
            post_process_fn: Some(post_process::flatten_campaign_report),
        },
        StreamDescriptor {
            name: "lead_activity_reports",
            path: "/reports/leadactivity",
            primary_key: &["campaign_id", "date"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::report(),
            schema_fn: schemas::lead_activity_reports,
            post_process_fn: Some(post_process::flatten_campaign_report),
        },
        // ====================================================================
        // Master-data streams
        // ====================================================================
        StreamDescriptor {
            name: "campaigns",
            path: "/campaigns",
            primary_key: &["id"],
            // The campaigns endpoint returns the array directly
            records_path: "$[*]",
            paginates: false,
            profile: ParamProfile::master_data(StatusFilter::Campaign),
            schema_fn: schemas::campaigns,
            post_process_fn: None,
        },
        StreamDescriptor {
            name: "deliveries",
            path: "/deliveries",
            primary_key: &["id"],
            records_path: "$.deliveries[*]",
            paginates: true,
            profile: ParamProfile::master_data(StatusFilter::Delivery),
            schema_fn: schemas::deliveries,
            post_process_fn: None,
        },
        StreamDescriptor {
            name: "responders",
            path: "/responders",
            primary_key: &["id"],
            records_path: DATA_PATH,
            paginates: true,
            profile: ParamProfile::default(),
            schema_fn: schemas::responders,
            post_process_fn: None,
        },
        StreamDescriptor {
            name: "buyers",
            path: "/buyers",
            primary_key: &["company"],
            records_path: "$.buyers[*]",
            paginates: true,
            profile: ParamProfile::master_data(StatusFilter::Buyer),
            schema_fn: schemas::buyers,
            post_process_fn: None,
        },
    ]
});

/// All supported streams, in sync order
pub fn all() -> &'static [StreamDescriptor] {
    &REGISTRY
}

/// Look up a stream descriptor by name
pub fn find(name: &str) -> Option<&'static StreamDescriptor> {
    REGISTRY.iter().find(|s| s.name == name)
}
