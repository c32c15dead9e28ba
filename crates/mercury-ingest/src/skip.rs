//! Skip cursor for resumable ingestion
//!
//! Restarting a multi-hour run after a crash replays the file from the start;
//! the cursor cheaply discards the records that already landed. The threshold
//! counts normalized, non-blank records, not raw lines.

/// Gate that suppresses the first `threshold` records of a stream.
#[derive(Debug)]
pub struct SkipCursor {
    seen: u64,
    threshold: u64,
}

impl SkipCursor {
    /// Create a cursor that discards the first `threshold` records.
    /// A threshold of 0 admits everything.
    pub fn new(threshold: u64) -> Self {
        Self { seen: 0, threshold }
    }

    /// Register one candidate record; returns whether it may proceed.
    ///
    /// Once the threshold is crossed the gate stays open for the rest of the
    /// stream.
    pub fn admit(&mut self) -> bool {
        self.seen += 1;
        self.seen > self.threshold
    }

    /// Number of candidate records observed so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_admits_all() {
        let mut cursor = SkipCursor::new(0);
        for _ in 0..5 {
            assert!(cursor.admit());
        }
        assert_eq!(cursor.seen(), 5);
    }

    #[test]
    fn test_skip_boundary() {
        // threshold k: the (k+1)-th record is the first admitted
        let mut cursor = SkipCursor::new(3);
        assert!(!cursor.admit()); // 1st
        assert!(!cursor.admit()); // 2nd
        assert!(!cursor.admit()); // 3rd
        assert!(cursor.admit()); // 4th
        assert!(cursor.admit()); // gate stays open
    }

    #[test]
    fn test_threshold_beyond_stream() {
        let mut cursor = SkipCursor::new(10);
        for _ in 0..10 {
            assert!(!cursor.admit());
        }
    }
}
