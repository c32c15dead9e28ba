//! Transfer encoding
//!
//! Serializes a batch to the CSV dialect the bulk-load endpoint expects:
//! every field quoted, internal quotes doubled, CRLF record terminator, two
//! columns `(text, group)`, no header row.

use crate::batch::Record;
use crate::error::{IngestError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Encode a batch into the wire payload.
///
/// Deterministic: the same batch always produces the same bytes, which is
/// what lets the transport retry a failed upload verbatim.
pub fn encode_batch(records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .has_headers(false)
        .from_writer(Vec::with_capacity(records.len() * 32));

    for record in records {
        let group = record.group.to_string();
        writer.write_record([record.text.as_str(), group.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| IngestError::Io(e.into_error()))
}
