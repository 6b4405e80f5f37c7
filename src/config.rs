//! Connector configuration
//!
//! The configuration surface of the connector: credentials, tenant addressing,
//! the report date window, ID filters and per-endpoint display options.
//! Loaded from a JSON or YAML file (or an inline JSON string) and validated
//! before any request is issued.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use url::Url;

/// Connector configuration
///
/// Every option maps deterministically to at most one query parameter; the
/// mapping rules live in the `params` module.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorConfig {
    /// API key, sent as the `key` query parameter on every request
    pub api_key: String,

    /// LeadByte tenant (e.g. "casesondemand" for casesondemand.leadbyte.com)
    #[serde(default = "default_domain")]
    pub domain: String,

    /// API version segment of the base URL (e.g. "v1.2", "v1.3")
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Earliest record date to sync (RFC 3339 or YYYY-MM-DD)
    #[serde(deserialize_with = "de_datetime")]
    pub start_date: DateTime<Utc>,

    /// Latest record date to sync (defaults to the time of the request)
    #[serde(default, deserialize_with = "de_datetime_opt")]
    pub end_date: Option<DateTime<Utc>>,

    /// Campaign IDs to filter by; empty means all campaigns
    #[serde(default)]
    pub campaign_ids: Vec<String>,

    /// Supplier IDs to filter by
    #[serde(default)]
    pub supplier_ids: Vec<String>,

    /// Responder IDs to filter by
    #[serde(default)]
    pub responder_ids: Vec<String>,

    /// Buyer IDs to filter by
    #[serde(default)]
    pub buyer_ids: Vec<String>,

    /// User-Agent header for outgoing requests
    #[serde(default)]
    pub user_agent: Option<String>,

    // ========================================================================
    // Report options
    // ========================================================================
    /// Ask the API to include debug columns
    #[serde(default)]
    pub debug: Option<bool>,

    /// Report grouping column (sent verbatim as `groupBy`)
    #[serde(default)]
    pub group_by: Option<String>,

    /// Named date preset; when set, it replaces the from/to window entirely
    #[serde(default)]
    pub date_preset: Option<String>,

    /// Include rows for leads without supplier attribution
    #[serde(default)]
    pub include_non_supplier_leads: Option<bool>,

    /// Restrict to leads submitted through the API
    #[serde(default)]
    pub lead_type_api: Option<bool>,

    /// Restrict to imported leads
    #[serde(default)]
    pub lead_type_import: Option<bool>,

    /// Display flags for report columns
    #[serde(default)]
    pub show_supplier: Option<bool>,
    #[serde(default)]
    pub show_buyer: Option<bool>,
    #[serde(default)]
    pub show_ssid: Option<bool>,
    #[serde(default)]
    pub show_campaign: Option<bool>,
    #[serde(default)]
    pub show_data: Option<bool>,

    // ========================================================================
    // Master-data status filters
    // ========================================================================
    /// Status filter for the campaigns endpoint
    #[serde(default)]
    pub campaign_status: Option<String>,

    /// Status filter for the deliveries endpoint
    #[serde(default)]
    pub delivery_status: Option<String>,

    /// Status filter for the buyers endpoint
    #[serde(default)]
    pub buyer_status: Option<String>,
}

fn default_domain() -> String {
    "casesondemand".to_string()
}

fn default_api_version() -> String {
    "v1.2".to_string()
}

impl ConnectorConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;

        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from an inline JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration before any request is issued
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.domain.is_empty() {
            return Err(Error::missing_field("domain"));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(Error::invalid_value(
                    "end_date",
                    "end_date precedes start_date",
                ));
            }
        }
        // Confirms the domain/api_version pair produces a well-formed URL
        Url::parse(&self.base_url())?;
        Ok(())
    }

    /// The API URL root for this tenant
    pub fn base_url(&self) -> String {
        format!(
            "http://{}.leadbyte.com/restapi/{}",
            self.domain, self.api_version
        )
    }
}

/// Parse a configured date value: RFC 3339, or a bare date at midnight UTC
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    Err(Error::invalid_value(
        "date",
        format!("'{value}' is not an RFC 3339 timestamp or YYYY-MM-DD date"),
    ))
}

fn de_datetime<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_datetime(&value).map_err(serde::de::Error::custom)
}

fn de_datetime_opt<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    value
        .map(|v| parse_datetime(&v).map_err(serde::de::Error::custom))
        .transpose()
}
