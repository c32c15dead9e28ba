//! Transport: retrying multipart uploader
//!
//! Delivers an encoded batch to the bulk-load endpoint. Any non-200 response
//! or network failure is retried with the identical payload after a fixed
//! backoff. By default there is no retry limit: ingestion correctness depends
//! on every batch eventually landing, and there is no fallback path, so the
//! transport blocks until the endpoint accepts the batch or the operator
//! kills the run. An opt-in attempt cap exists as a circuit breaker.

use crate::error::{IngestError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Fixed port of the bulk-load endpoint.
pub const UPLOAD_PORT: u16 = 5001;

/// Fixed path of the bulk-load endpoint.
pub const UPLOAD_PATH: &str = "/upload_csv";

/// File name reported for the CSV part of the multipart body.
const CSV_PART_FILE_NAME: &str = "baselist.csv";

/// Build the upload URL for a destination host.
pub fn upload_url(host: &str) -> String {
    format!("http://{host}:{UPLOAD_PORT}{UPLOAD_PATH}")
}

/// Result of a successful (eventually) batch upload.
#[derive(Debug)]
pub struct UploadOutcome {
    /// Requests issued for this batch, including the successful one
    pub attempts: u32,
    /// Body text of the accepting 200 response
    pub response_text: String,
}

/// Client for the bulk-load endpoint with per-batch retry.
pub struct UploadClient {
    client: Client,
    endpoint: String,
    keyspace: String,
    table: String,
    backoff: Duration,
    max_attempts: Option<u32>,
}

impl UploadClient {
    /// Create a client for `http://{host}:5001/upload_csv`.
    pub fn new(
        host: &str,
        keyspace: impl Into<String>,
        table: impl Into<String>,
        backoff: Duration,
        max_attempts: Option<u32>,
    ) -> Result<Self> {
        Self::with_endpoint(upload_url(host), keyspace, table, backoff, max_attempts)
    }

    /// Create a client for an explicit endpoint URL. Used by tests.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        keyspace: impl Into<String>,
        table: impl Into<String>,
        backoff: Duration,
        max_attempts: Option<u32>,
    ) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            keyspace: keyspace.into(),
            table: table.into(),
            backoff,
            max_attempts,
        })
    }

    /// Endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one encoded batch, retrying until the endpoint accepts it.
    ///
    /// Each attempt posts the same CSV bytes as the `file` part alongside the
    /// `keyspace` and `table` form fields. Only HTTP 200 counts as success.
    /// Returns `RetriesExhausted` only when an attempt cap was configured.
    pub async fn send(&self, csv_bytes: Vec<u8>) -> Result<UploadOutcome> {
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            debug!(attempt = attempts, endpoint = %self.endpoint, "Uploading batch");

            let last_response = match self.attempt(csv_bytes.clone()).await {
                Ok(body) => {
                    info!(attempts, "Batch accepted by endpoint");
                    return Ok(UploadOutcome {
                        attempts,
                        response_text: body,
                    });
                },
                Err(AttemptFailure::Status(status, body)) => {
                    warn!(
                        attempt = attempts,
                        status = %status,
                        response = %body,
                        "Upload rejected, will retry"
                    );
                    body
                },
                Err(AttemptFailure::Network(err)) => {
                    warn!(attempt = attempts, error = %err, "Upload failed, will retry");
                    err.to_string()
                },
            };

            if let Some(cap) = self.max_attempts {
                if attempts >= cap {
                    return Err(IngestError::RetriesExhausted {
                        attempts,
                        last_response,
                    });
                }
            }

            debug!(backoff_secs = self.backoff.as_secs_f64(), "Waiting before retry");
            sleep(self.backoff).await;
        }
    }

    /// Issue a single upload request.
    async fn attempt(&self, csv_bytes: Vec<u8>) -> std::result::Result<String, AttemptFailure> {
        let file_part = Part::bytes(csv_bytes)
            .file_name(CSV_PART_FILE_NAME)
            .mime_str("text/csv")
            .map_err(AttemptFailure::Network)?;

        let form = Form::new()
            .part("file", file_part)
            .text("keyspace", self.keyspace.clone())
            .text("table", self.table.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(AttemptFailure::Network)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::OK {
            Ok(body)
        } else {
            Err(AttemptFailure::Status(status, body))
        }
    }
}

/// Failure of one upload attempt. Internal to the retry loop.
enum AttemptFailure {
    Status(StatusCode, String),
    Network(reqwest::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url() {
        assert_eq!(upload_url("127.0.0.1"), "http://127.0.0.1:5001/upload_csv");
        assert_eq!(
            upload_url("db.internal"),
            "http://db.internal:5001/upload_csv"
        );
    }

    #[test]
    fn test_client_endpoint() {
        let client = UploadClient::new(
            "10.0.0.5",
            "mercure",
            "baselist",
            Duration::from_secs(10),
            None,
        )
        .unwrap();
        assert_eq!(client.endpoint(), "http://10.0.0.5:5001/upload_csv");
    }
}
