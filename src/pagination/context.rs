//! Scoped pagination context
//!
//! One `PageContext` is acquired per stream invocation and released exactly
//! once, whether the run completes, the consumer stops early, or an error
//! unwinds the loop. Release emits the sync summary line, so the summary is
//! guaranteed on every exit path.

use tracing::{debug, info};

/// Guard scoping a single pagination run
#[derive(Debug)]
pub struct PageContext {
    stream: String,
    pages: u32,
}

impl PageContext {
    /// Acquire the pagination context for a stream
    pub fn acquire(stream: impl Into<String>) -> Self {
        let stream = stream.into();
        debug!("Acquired pagination context for stream: {stream}");
        Self { stream, pages: 0 }
    }

    /// Count a page that produced records
    pub fn record_page(&mut self) {
        self.pages += 1;
    }

    /// Number of productive pages so far
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// The stream this context belongs to
    pub fn stream(&self) -> &str {
        &self.stream
    }
}

impl Drop for PageContext {
    fn drop(&mut self) {
        if self.pages == 0 {
            info!("Finished syncing {}. No pages received.", self.stream);
        } else {
            info!(
                "Finished syncing {}. {} pages received.",
                self.stream, self.pages
            );
        }
    }
}
