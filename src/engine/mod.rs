//! Execution engine
//!
//! The request loop at the heart of the connector: build parameters, fetch a
//! page, extract and post-process its records, then let the paginator decide
//! whether another page exists. Records are exposed as a lazy stream: the
//! consumer can start processing before the final page is fetched, and
//! dropping the stream stops further fetches.

mod types;

pub use types::{CheckResult, SyncStats};

use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use crate::extract::RecordExtractor;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{PageContext, PageToken, Paginator};
use crate::params::{self, ParamProfile};
use crate::streams::StreamDescriptor;
use crate::types::{JsonObject, JsonValue};
use chrono::Utc;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::pin::Pin;
use tracing::debug;

/// Lazy stream of post-processed records for one sync of one stream
pub type RecordStream = Pin<Box<dyn Stream<Item = Result<JsonObject>> + Send>>;

/// Sync engine for orchestrating data extraction
pub struct SyncEngine {
    /// HTTP client
    client: HttpClient,
    /// Connector configuration
    config: ConnectorConfig,
}

impl SyncEngine {
    /// Create a new sync engine from validated configuration
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = HttpClientConfig::builder().base_url(config.base_url());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent);
        }
        let client = HttpClient::with_config(builder.build());

        Ok(Self { client, config })
    }

    /// Create an engine with a pre-built HTTP client
    pub fn with_client(config: ConnectorConfig, client: HttpClient) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    /// The engine's configuration
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Open the lazy record stream for one stream descriptor
    ///
    /// Requests are strictly sequential: the token for page N+1 is never
    /// computed before page N's response is fully parsed. The pagination
    /// context acquired here is released when the stream is dropped, whether
    /// by normal completion, early termination by the consumer, or an error.
    pub fn record_stream(&self, descriptor: &'static StreamDescriptor) -> RecordStream {
        let state = PageState {
            client: self.client.clone(),
            config: self.config.clone(),
            descriptor,
            extractor: RecordExtractor::new(descriptor.records_path),
            paginator: descriptor.paginator(),
            context: PageContext::acquire(descriptor.name),
            token: None,
            buffered: VecDeque::new(),
            done: false,
        };

        Box::pin(stream::try_unfold(state, |mut state| async move {
            loop {
                if let Some(record) = state.buffered.pop_front() {
                    return Ok(Some((record, state)));
                }
                if state.done {
                    return Ok(None);
                }
                state.fetch_page().await?;
            }
        }))
    }

    /// Validate credentials by fetching the campaigns endpoint once
    pub async fn check(&self) -> Result<CheckResult> {
        let params = params::build(&self.config, ParamProfile::default(), None, Utc::now());
        let response = self
            .client
            .get_with_config("/campaigns", RequestConfig::new().params(params))
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => return Ok(CheckResult::failure(e.to_string())),
        };

        let body: JsonValue = response.json().await.map_err(Error::Http)?;
        if let Some(status) = body.get("status").and_then(JsonValue::as_str) {
            if status != "Success" {
                let message = body
                    .get("message")
                    .and_then(JsonValue::as_str)
                    .unwrap_or("API reported failure");
                return Ok(CheckResult::failure(message));
            }
        }

        Ok(CheckResult::success())
    }
}

/// State carried across pages of one sync
///
/// Owning the `PageContext` here ties the guard's lifetime to the record
/// stream: however the stream ends, the context is released exactly once.
struct PageState {
    client: HttpClient,
    config: ConnectorConfig,
    descriptor: &'static StreamDescriptor,
    extractor: RecordExtractor,
    paginator: Box<dyn Paginator>,
    context: PageContext,
    token: Option<PageToken>,
    buffered: VecDeque<JsonObject>,
    done: bool,
}

impl PageState {
    /// Fetch, extract and post-process one page, then decide continuation
    async fn fetch_page(&mut self) -> Result<()> {
        let params = params::build(
            &self.config,
            self.descriptor.profile,
            self.token.take(),
            Utc::now(),
        );

        let response = self
            .client
            .get_with_config(self.descriptor.path, RequestConfig::new().params(params))
            .await?;
        let body: JsonValue = response.json().await.map_err(Error::Http)?;

        let records = self.extractor.extract(&body)?;
        let record_count = records.len();
        if record_count > 0 {
            self.context.record_page();
        }
        debug!(
            "{}: page {} yielded {} records",
            self.descriptor.name,
            self.context.pages(),
            record_count
        );

        for value in records {
            let record = match value {
                JsonValue::Object(map) => map,
                other => {
                    return Err(Error::record_extraction(
                        self.descriptor.records_path,
                        format!("expected an object record, got: {other}"),
                    ))
                }
            };
            if let Some(processed) = self.descriptor.post_process(record)? {
                self.buffered.push_back(processed);
            }
        }

        // The next token comes from the same response; a non-paginating
        // stream never fetches a second page regardless of body content.
        self.token = self.paginator.next_token(&body);
        if self.token.is_none() {
            self.done = true;
        }
        Ok(())
    }
}
