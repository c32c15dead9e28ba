//! Progress reporting for ingestion runs
//!
//! Observational only: a structured log line after every flush, plus an
//! indicatif bar when an approximate total is known. For a file of unknown
//! size a spinner-style counter is shown instead.

use indicatif::{ProgressBar, ProgressStyle};

/// Reports processed-record counts after each batch flush.
pub struct ProgressReporter {
    bar: ProgressBar,
    total_hint: Option<u64>,
}

impl ProgressReporter {
    /// Create a reporter; `total_hint` is an approximate record count used
    /// only for display.
    pub fn new(total_hint: Option<u64>) -> Self {
        let bar = match total_hint {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
                        .expect("Invalid progress bar template")
                        .progress_chars("#>-"),
                );
                pb
            },
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {pos} records {msg}")
                        .expect("Invalid spinner template"),
                );
                pb
            },
        };

        Self { bar, total_hint }
    }

    /// Record a completed flush: `processed` records handed to the transport
    /// so far and the last server response text.
    pub fn flushed(&self, processed: u64, response_text: &str) {
        self.bar.set_position(processed);
        match self.total_hint {
            Some(total) => tracing::info!(
                processed,
                total,
                response = %response_text.trim(),
                "Flushed batch"
            ),
            None => tracing::info!(
                processed,
                response = %response_text.trim(),
                "Flushed batch"
            ),
        }
    }

    /// Finish the bar at end of stream.
    pub fn finish(&self, processed: u64) {
        self.bar.set_position(processed);
        self.bar
            .finish_with_message(format!("Ingested {} record(s)", format_count(processed)));
    }
}

/// Format a record count into a short human-readable string
pub fn format_count(count: u64) -> String {
    const UNITS: &[(u64, &str)] = &[(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for &(scale, suffix) in UNITS {
        if count >= scale {
            return format!("{:.2}{}", count as f64 / scale as f64, suffix);
        }
    }
    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.00K");
        assert_eq!(format_count(500_000), "500.00K");
        assert_eq!(format_count(1_500_000), "1.50M");
        assert_eq!(format_count(2_000_000_000), "2.00B");
    }

    #[test]
    fn test_reporter_with_total() {
        let reporter = ProgressReporter::new(Some(100));
        reporter.flushed(50, "ok");
        reporter.finish(100);
        assert_eq!(reporter.bar.position(), 100);
    }

    #[test]
    fn test_reporter_without_total() {
        let reporter = ProgressReporter::new(None);
        reporter.flushed(10, "ok");
        assert_eq!(reporter.bar.position(), 10);
    }
}
