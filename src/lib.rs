// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # LeadByte Connector
//!
//! A Rust-native connector for extracting reports and master data from the
//! LeadByte REST API. Full-refresh only: every stream replicates completely
//! on every run.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leadbyte_connector::config::ConnectorConfig;
//! use leadbyte_connector::engine::SyncEngine;
//! use leadbyte_connector::streams;
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> leadbyte_connector::Result<()> {
//!     let config = ConnectorConfig::load("config.json")?;
//!     let engine = SyncEngine::new(config)?;
//!
//!     let descriptor = streams::find("email_reports").unwrap();
//!     let mut records = engine.record_stream(descriptor);
//!     while let Some(record) = records.try_next().await? {
//!         // Records arrive page by page, post-processed and ready to emit
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Sync Engine                             │
//! │  record_stream(descriptor) → lazy Stream<Record>                │
//! │  Start → Fetch → Extract → Decide(continue|stop) → Done         │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Params  │   HTTP    │    Extract    │ Paginate  │   Output    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ API key  │ GET       │ status check  │ next_page │ SCHEMA      │
//! │ from/to  │ Retry     │ JSONPath      │ token     │ RECORD      │
//! │ Yes/No   │ Backoff   │ post-process  │ context   │ JSONL       │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document the remaining public enum variants

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connector configuration
pub mod config;

/// HTTP client with retry support
pub mod http;

/// Query parameter construction
pub mod params;

/// Record extraction from API responses
pub mod extract;

/// Pagination protocol
pub mod pagination;

/// Stream schema types
pub mod schema;

/// Stream descriptors
pub mod streams;

/// Main execution engine
pub mod engine;

/// Output sink
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
