//! Mercury Common Library
//!
//! Shared infrastructure for the Mercury workspace members:
//!
//! - **Logging**: every Mercury binary initializes `tracing` through
//!   [`logging::init_logging`] so that console and file output behave the
//!   same way across tools.
//! - **Error Handling**: [`MercuryError`] and [`Result`] for failures that
//!   are not specific to one tool (IO, configuration, network).

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{MercuryError, Result};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel, LogOutput};
