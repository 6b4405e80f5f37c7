//! HTTP client with retry support
//!
//! The transport collaborator for the request loop. Handles:
//! - Automatic retries with configurable backoff
//! - Retry-After handling on 429 responses
//! - Error classification for retry decisions

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
