//! Record extractor implementation
//!
//! Two-phase extraction: first the API status check, then path evaluation.
//! An API-reported failure is not a transport error: the page comes back
//! empty and the sync continues, so the caller's pagination check decides
//! whether the stream ends.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use tracing::error;

/// Value of the status field on successful responses
const STATUS_SUCCESS: &str = "Success";

/// Extracts record nodes from a decoded response body
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    /// Path expression locating records in the body
    records_path: String,
}

impl RecordExtractor {
    /// Create an extractor for the given record path
    pub fn new(records_path: impl Into<String>) -> Self {
        Self {
            records_path: records_path.into(),
        }
    }

    /// The path expression this extractor evaluates
    pub fn records_path(&self) -> &str {
        &self.records_path
    }

    /// Extract the records of one page, in document order
    ///
    /// Returns an empty page (not an error) when the body carries a failure
    /// status or when the path matches nothing. A body without a `status`
    /// field, such as the bare array the campaigns endpoint returns, is
    /// treated as successful.
    pub fn extract(&self, body: &JsonValue) -> Result<Vec<JsonValue>> {
        if let Some(status) = body.get("status").and_then(JsonValue::as_str) {
            if status != STATUS_SUCCESS {
                let message = body
                    .get("message")
                    .and_then(JsonValue::as_str)
                    .unwrap_or("Unknown error");
                error!("API Error: {message}");
                return Ok(Vec::new());
            }
        }

        self.evaluate_path(body)
    }

    /// Evaluate the record path against the body
    fn evaluate_path(&self, body: &JsonValue) -> Result<Vec<JsonValue>> {
        // Wildcard paths (the common case: "$.data[*]", "$[*]") go through
        // the JSONPath engine; plain dot paths take the direct walk.
        if self.records_path.contains('*') {
            extract_with_jsonpath(body, &self.records_path)
        } else {
            match extract_simple_path(body, &self.records_path) {
                Some(JsonValue::Array(arr)) => Ok(arr),
                Some(value) => Ok(vec![value]),
                None => Ok(Vec::new()),
            }
        }
    }
}

/// Extract a value using a simple dot-notation path
fn extract_simple_path(value: &JsonValue, path: &str) -> Option<JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        current = current.get(part)?;
    }

    Some(current.clone())
}

/// Extract records using jsonpath-rust
fn extract_with_jsonpath(value: &JsonValue, path: &str) -> Result<Vec<JsonValue>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path).map_err(|e| Error::JsonPath {
        message: format!("Invalid JSONPath: {e}"),
    })?;

    let result = jp.find(value);

    match result {
        JsonValue::Array(arr) => Ok(arr),
        JsonValue::Null => Ok(Vec::new()),
        other => Ok(vec![other]),
    }
}
