//! Mercury Ingest Library
//!
//! Streaming batch ingestion of very large line-oriented files into a
//! wide-column store through its bulk CSV upload endpoint.
//!
//! # Pipeline
//!
//! ```text
//! line -> normalize -> skip gate -> batch -> CSV encode -> upload (retry)
//! ```
//!
//! The pipeline is strictly sequential: one batch is encoded and delivered
//! before the next line is read. Memory stays bounded by the batch size, and
//! a failed upload is retried with the same payload until the endpoint
//! accepts it.
//!
//! # Example
//!
//! ```no_run
//! use mercury_ingest::{config::IngestConfig, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = IngestConfig::new("./hostnames.txt", 1);
//!     let report = pipeline::fill_baselist(&config).await?;
//!     println!("Ingested {} records", report.processed);
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod config;
pub mod encode;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod progress;
pub mod skip;
pub mod upload;

// Re-export commonly used types
pub use batch::{BatchAccumulator, Record};
pub use config::IngestConfig;
pub use error::{IngestError, Result};
