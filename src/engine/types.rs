//! Engine types

use serde::{Deserialize, Serialize};

/// Result of a connection check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check succeeded
    pub success: bool,

    /// Error message if failed
    pub message: Option<String>,
}

impl CheckResult {
    /// Create a successful check result
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Create a failed check result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Statistics from a sync operation
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    /// Total records synced
    pub records_synced: usize,
    /// Total streams synced
    pub streams_synced: usize,
    /// Errors encountered
    pub errors: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_synced += count;
    }

    /// Add a stream
    pub fn add_stream(&mut self) {
        self.streams_synced += 1;
    }

    /// Add an error
    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_success() {
        let result = CheckResult::success();
        assert!(result.success);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_check_result_failure() {
        let result = CheckResult::failure("Invalid API key");
        assert!(!result.success);
        assert_eq!(result.message, Some("Invalid API key".to_string()));
    }

    #[test]
    fn test_sync_stats_accumulation() {
        let mut stats = SyncStats::new();
        stats.add_records(10);
        stats.add_records(5);
        stats.add_stream();
        stats.add_error();
        stats.set_duration(1200);

        assert_eq!(stats.records_synced, 15);
        assert_eq!(stats.streams_synced, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.duration_ms, 1200);
    }
}
