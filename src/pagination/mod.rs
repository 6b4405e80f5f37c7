//! Pagination protocol
//!
//! A paginator inspects a response body and decides whether another page
//! exists, producing the token (extra query parameters) that fetches it.
//! The `PageContext` guard scopes one pagination run and reports its
//! outcome on every exit path.

mod context;
mod strategies;
mod types;

pub use context::PageContext;
pub use strategies::{NextPagePaginator, NoPaginator};
pub use types::{PageToken, Paginator};
