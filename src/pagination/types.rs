//! Pagination types and traits

use crate::types::{JsonValue, StringMap};

/// Opaque carry-over state for fetching the next page
///
/// The token is a map of extra query parameters. It is produced by a
/// [`Paginator`] after inspecting a response and consumed exactly once by
/// the parameter builder for the following request, where its entries are
/// merged into (and may override) the base parameters.
pub type PageToken = StringMap;

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Compute the token for the next page from a response body
    ///
    /// `None` terminates pagination.
    fn next_token(&self, body: &JsonValue) -> Option<PageToken>;
}

/// Convert a next-page indicator value into a token
///
/// An object becomes the token verbatim (scalar values stringified); a bare
/// string or number becomes a single parameter named after the indicator
/// field. Null, empty strings and empty objects terminate.
pub(crate) fn token_from_value(field: &str, value: &JsonValue) -> Option<PageToken> {
    match value {
        JsonValue::Object(map) => {
            let mut token = PageToken::new();
            for (key, entry) in map {
                if let Some(text) = scalar_to_string(entry) {
                    token.insert(key.clone(), text);
                }
            }
            if token.is_empty() {
                None
            } else {
                Some(token)
            }
        }
        JsonValue::String(s) if !s.is_empty() => {
            let mut token = PageToken::new();
            token.insert(field.to_string(), s.clone());
            Some(token)
        }
        JsonValue::Number(n) => {
            let mut token = PageToken::new();
            token.insert(field.to_string(), n.to_string());
            Some(token)
        }
        _ => None,
    }
}

/// Render a scalar JSON value as a query parameter value
fn scalar_to_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
