//! The streaming ingestion loop
//!
//! Wires the components together: read one line, normalize, gate through the
//! skip cursor, accumulate; when a batch fills, encode and upload it before
//! reading further. At end of stream the final partial batch is flushed
//! through the same path.
//!
//! The loop is deliberately sequential. Exactly one upload is in flight at
//! any time, batches leave in input order, and memory is bounded by one
//! batch.

use crate::batch::{BatchAccumulator, Record};
use crate::config::IngestConfig;
use crate::encode::encode_batch;
use crate::error::{IngestError, Result};
use crate::normalize::normalize_bytes;
use crate::progress::ProgressReporter;
use crate::skip::SkipCursor;
use crate::upload::UploadClient;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Summary of a completed ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    /// Records included in flushed batches
    pub processed: u64,
    /// Batches delivered to the endpoint
    pub batches: u64,
    /// Leading records discarded by the skip cursor
    pub skipped: u64,
}

/// Run the fill-baselist pipeline to stream exhaustion.
pub async fn fill_baselist(config: &IngestConfig) -> Result<FillReport> {
    let uploader = UploadClient::new(
        &config.host,
        &config.keyspace,
        &config.table,
        config.retry_backoff,
        config.max_attempts,
    )?;

    fill_baselist_with(config, &uploader).await
}

/// Run the pipeline against an explicitly constructed transport.
///
/// Lets callers (and tests) substitute the endpoint the batches go to.
pub async fn fill_baselist_with(
    config: &IngestConfig,
    uploader: &UploadClient,
) -> Result<FillReport> {
    let file = File::open(&config.base_list_file)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                IngestError::FileNotFound(config.base_list_file.clone())
            },
            _ => IngestError::Io(e),
        })?;

    info!(
        file = %config.base_list_file,
        group = config.group,
        keyspace = %config.keyspace,
        table = %config.table,
        skip_threshold = config.skip_threshold,
        max_batch_size = config.max_batch_size,
        endpoint = %uploader.endpoint(),
        "Starting baselist ingestion"
    );

    let reporter = ProgressReporter::new(config.total_hint);
    let mut reader = BufReader::new(file);
    let mut raw: Vec<u8> = Vec::with_capacity(256);
    let mut cursor = SkipCursor::new(config.skip_threshold);
    let mut accumulator = BatchAccumulator::new(config.max_batch_size);
    let mut processed: u64 = 0;
    let mut batches: u64 = 0;

    loop {
        raw.clear();
        let read = reader.read_until(b'\n', &mut raw).await?;
        if read == 0 {
            break;
        }

        let Some(text) = normalize_bytes(&raw) else {
            continue;
        };
        if !cursor.admit() {
            continue;
        }

        if let Some(batch) = accumulator.push(Record::new(text, config.group)) {
            flush(uploader, &batch, &mut processed, &mut batches, &reporter).await?;
        }
    }

    // Final, possibly undersized batch
    if let Some(batch) = accumulator.finish() {
        flush(uploader, &batch, &mut processed, &mut batches, &reporter).await?;
    }

    reporter.finish(processed);

    let skipped = cursor.seen().min(config.skip_threshold);
    info!(processed, batches, skipped, "Ingestion complete");

    Ok(FillReport {
        processed,
        batches,
        skipped,
    })
}

/// Encode one batch and block until the endpoint accepts it.
async fn flush(
    uploader: &UploadClient,
    batch: &[Record],
    processed: &mut u64,
    batches: &mut u64,
    reporter: &ProgressReporter,
) -> Result<()> {
    let payload = encode_batch(batch)?;
    let outcome = uploader.send(payload).await?;

    *processed += batch.len() as u64;
    *batches += 1;
    reporter.flushed(*processed, &outcome.response_text);

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let config = IngestConfig::new("/nonexistent/baselist.txt", 1);
        let err = fill_baselist(&config).await.unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound(path) if path.contains("nonexistent")));
    }
}
