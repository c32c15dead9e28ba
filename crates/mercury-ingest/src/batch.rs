//! Record batching
//!
//! Buffers normalized records until the batch size threshold is reached, then
//! hands the full buffer downstream. Every record lands in exactly one batch,
//! in input order.

/// One normalized input line plus the run-wide group tag.
///
/// Invariant: `text` is never empty; blank lines are dropped before batching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Escaped line text
    pub text: String,
    /// Group tag shared by every record of the run
    pub group: i16,
}

impl Record {
    pub fn new(text: impl Into<String>, group: i16) -> Self {
        Self {
            text: text.into(),
            group,
        }
    }
}

/// Accumulates records into fixed-size batches.
#[derive(Debug)]
pub struct BatchAccumulator {
    buffer: Vec<Record>,
    max_batch_size: usize,
}

impl BatchAccumulator {
    /// Create an accumulator emitting batches of `max_batch_size` records.
    pub fn new(max_batch_size: usize) -> Self {
        assert!(max_batch_size > 0, "batch size must be positive");
        Self {
            buffer: Vec::with_capacity(max_batch_size.min(1 << 20)),
            max_batch_size,
        }
    }

    /// Append a record; returns the completed batch when the buffer fills.
    pub fn push(&mut self, record: Record) -> Option<Vec<Record>> {
        self.buffer.push(record);
        if self.buffer.len() >= self.max_batch_size {
            let capacity = self.max_batch_size.min(1 << 20);
            Some(std::mem::replace(
                &mut self.buffer,
                Vec::with_capacity(capacity),
            ))
        } else {
            None
        }
    }

    /// Emit the final, possibly undersized batch at end of stream.
    ///
    /// Returns `None` when the buffer is empty; an empty batch is never sent.
    pub fn finish(&mut self) -> Option<Vec<Record>> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buffer))
        }
    }

    /// Records currently buffered.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> Record {
        Record::new(text, 1)
    }

    #[test]
    fn test_emits_exactly_at_threshold() {
        let mut acc = BatchAccumulator::new(3);
        assert!(acc.push(record("a")).is_none());
        assert!(acc.push(record("b")).is_none());

        let batch = acc.push(record("c")).expect("batch at threshold");
        assert_eq!(batch.len(), 3);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let mut acc = BatchAccumulator::new(2);
        acc.push(record("first"));
        let batch = acc.push(record("second")).unwrap();
        assert_eq!(batch[0].text, "first");
        assert_eq!(batch[1].text, "second");
    }

    #[test]
    fn test_final_partial_batch() {
        let mut acc = BatchAccumulator::new(10);
        acc.push(record("only"));
        let batch = acc.finish().expect("partial batch");
        assert_eq!(batch.len(), 1);
        assert!(acc.finish().is_none());
    }

    #[test]
    fn test_finish_on_empty_buffer() {
        let mut acc = BatchAccumulator::new(10);
        assert!(acc.finish().is_none());
    }

    #[test]
    fn test_every_record_in_exactly_one_batch() {
        let mut acc = BatchAccumulator::new(2);
        let mut seen = Vec::new();
        for i in 0..5 {
            if let Some(batch) = acc.push(record(&format!("r{i}"))) {
                assert_eq!(batch.len(), 2);
                seen.extend(batch);
            }
        }
        if let Some(batch) = acc.finish() {
            seen.extend(batch);
        }
        let texts: Vec<_> = seen.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["r0", "r1", "r2", "r3", "r4"]);
    }
}
