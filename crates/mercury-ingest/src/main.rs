//! Mercury - base list ingestion tool

use clap::{Parser, Subcommand};
use mercury_common::logging::{init_logging, LogConfig, LogLevel};
use mercury_ingest::config::{
    IngestConfig, DEFAULT_HOST, DEFAULT_KEYSPACE, DEFAULT_MAX_BATCH_SIZE,
    DEFAULT_RETRY_BACKOFF_SECS, DEFAULT_TABLE,
};
use mercury_ingest::pipeline;
use std::process;
use std::time::Duration;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "mercury")]
#[command(author, version, about = "Mercury base list ingestion tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stream a base list file into the destination store in CSV batches
    FillBaselist {
        /// Path to the line-oriented base list file
        #[arg(short, long)]
        file: String,

        /// Group tag attached to every row (e.g. RY is 1, RP is 2)
        #[arg(short, long)]
        group: i16,

        /// Destination host running the upload endpoint on port 5001
        #[arg(long, env = "MERCURY_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Keyspace of the destination store
        #[arg(long, env = "MERCURY_KEYSPACE", default_value = DEFAULT_KEYSPACE)]
        keyspace: String,

        /// Destination table name
        #[arg(long, default_value = DEFAULT_TABLE)]
        table: String,

        /// Number of leading records to skip (resume a partial run)
        #[arg(long, default_value_t = 0)]
        skip: u64,

        /// Records per upload batch
        #[arg(long, default_value_t = DEFAULT_MAX_BATCH_SIZE)]
        batch_size: usize,

        /// Seconds to wait between retries of a failed upload
        #[arg(long, default_value_t = DEFAULT_RETRY_BACKOFF_SECS)]
        retry_backoff: u64,

        /// Give up after this many attempts per batch (default: retry forever)
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Approximate total record count, for progress display only
        #[arg(long)]
        total_hint: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("mercury".to_string())
        .build();

    // Merge with environment variables (they take precedence per field)
    let log_config = LogConfig::from_env_with(log_config.clone()).unwrap_or(log_config);

    // CLI should still work if logging setup fails
    let _ = init_logging(&log_config);

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> mercury_ingest::Result<()> {
    match cli.command {
        Command::FillBaselist {
            file,
            group,
            host,
            keyspace,
            table,
            skip,
            batch_size,
            retry_backoff,
            max_attempts,
            total_hint,
        } => {
            if batch_size == 0 {
                return Err(mercury_ingest::IngestError::config(
                    "--batch-size must be at least 1",
                ));
            }

            let config = IngestConfig {
                base_list_file: file,
                group,
                host,
                keyspace,
                table,
                skip_threshold: skip,
                max_batch_size: batch_size,
                retry_backoff: Duration::from_secs(retry_backoff),
                max_attempts,
                total_hint,
            };

            pipeline::fill_baselist(&config).await?;
        },
    }

    Ok(())
}
