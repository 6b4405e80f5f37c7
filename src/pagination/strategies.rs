//! Pagination strategy implementations

use super::types::{token_from_value, PageToken, Paginator};
use crate::types::JsonValue;

// ============================================================================
// Next-Page Field Pagination
// ============================================================================

/// Pagination driven by a next-page indicator field in the response body
///
/// The default policy: look for `next_page` at the top level of the
/// response. When present and non-empty it becomes the next token; its
/// entries ride along as extra query parameters on the following request.
#[derive(Debug, Clone)]
pub struct NextPagePaginator {
    /// Name of the next-page indicator field
    pub field: String,
}

impl Default for NextPagePaginator {
    fn default() -> Self {
        Self {
            field: "next_page".to_string(),
        }
    }
}

impl NextPagePaginator {
    /// Create a paginator reading a custom indicator field
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Paginator for NextPagePaginator {
    fn next_token(&self, body: &JsonValue) -> Option<PageToken> {
        body.get(&self.field)
            .and_then(|value| token_from_value(&self.field, value))
    }
}

// ============================================================================
// No Pagination
// ============================================================================

/// No pagination - exactly one page is ever fetched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPaginator;

impl Paginator for NoPaginator {
    fn next_token(&self, _body: &JsonValue) -> Option<PageToken> {
        None
    }
}
