//! Configuration for the ingestion pipeline
//!
//! All knobs of a `fill-baselist` run live here. The CLI populates this from
//! flags and environment variables; library users construct it directly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Ingestion Defaults
// ============================================================================

/// Default destination host when not specified.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default keyspace of the destination store.
pub const DEFAULT_KEYSPACE: &str = "mercure";

/// Destination table for base list data.
pub const DEFAULT_TABLE: &str = "baselist";

/// Rows accumulated before a batch is flushed to the endpoint.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 500_000;

/// Seconds to wait between upload attempts of the same batch.
pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 10;

/// Ingestion run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Path to the line-oriented base list file
    pub base_list_file: String,

    /// Group tag attached to every row of this run
    pub group: i16,

    /// Destination host (the upload endpoint listens on port 5001)
    pub host: String,

    /// Keyspace of the destination store
    pub keyspace: String,

    /// Destination table name
    pub table: String,

    /// Number of leading normalized records to discard (resume support)
    pub skip_threshold: u64,

    /// Maximum records per batch
    pub max_batch_size: usize,

    /// Delay between retries of a failed upload
    pub retry_backoff: Duration,

    /// Optional cap on upload attempts per batch. `None` retries forever.
    pub max_attempts: Option<u32>,

    /// Approximate total record count, for progress display only
    pub total_hint: Option<u64>,
}

impl IngestConfig {
    /// Create a config with defaults for everything but the file and group
    pub fn new(base_list_file: impl Into<String>, group: i16) -> Self {
        Self {
            base_list_file: base_list_file.into(),
            group,
            host: DEFAULT_HOST.to_string(),
            keyspace: DEFAULT_KEYSPACE.to_string(),
            table: DEFAULT_TABLE.to_string(),
            skip_threshold: 0,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            retry_backoff: Duration::from_secs(DEFAULT_RETRY_BACKOFF_SECS),
            max_attempts: None,
            total_hint: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = IngestConfig::new("/data/baselist.txt", 2);
        assert_eq!(config.base_list_file, "/data/baselist.txt");
        assert_eq!(config.group, 2);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.keyspace, "mercure");
        assert_eq!(config.table, "baselist");
        assert_eq!(config.skip_threshold, 0);
        assert_eq!(config.max_batch_size, 500_000);
        assert_eq!(config.retry_backoff, Duration::from_secs(10));
        assert!(config.max_attempts.is_none());
        assert!(config.total_hint.is_none());
    }
}
