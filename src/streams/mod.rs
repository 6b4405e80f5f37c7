//! Stream descriptors
//!
//! One immutable descriptor per supported endpoint: request path, primary
//! key, record path, parameter profile, schema and optional post-processing.
//! Report streams share the report parameter profile and the next-page
//! pagination policy; master-data streams fetch with the API key alone.

mod descriptors;
mod post_process;
mod schemas;

pub use descriptors::{all, find, PostProcessFn, StreamDescriptor};

#[cfg(test)]
mod tests;
