//! Query parameter construction
//!
//! One shared builder produces the query parameters for every request,
//! driven by a per-stream [`ParamProfile`]. Report streams carry the date
//! window, ID filters and display flags; master-data streams carry only the
//! API key and an optional status filter.

mod builder;

pub use builder::{build, ParamProfile, StatusFilter};

#[cfg(test)]
mod tests;
