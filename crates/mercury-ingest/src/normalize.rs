//! Line normalization and escaping
//!
//! Turns one raw input line into the escaped form stored in the base list.
//! Lines are trimmed, blank lines are dropped, and characters that would
//! collide with the transfer format's unquoting on the server side are
//! escaped: `\` is doubled and the field delimiter `,` becomes `\,`.
//!
//! Escaping order matters: backslashes first, then commas, so the escape
//! character introduced for commas is never itself re-escaped.

/// Normalize a trimmed-or-not raw line.
///
/// Returns `None` for lines that are empty after trimming; those never become
/// records. Otherwise returns the escaped text.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let escaped = trimmed.replace('\\', "\\\\").replace(',', "\\,");
    Some(escaped)
}

/// Normalize a raw line read as bytes.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing the
/// run; a malformed byte in a 300M-line file must never abort ingestion.
pub fn normalize_bytes(raw: &[u8]) -> Option<String> {
    normalize(&String::from_utf8_lossy(raw))
}

/// Reverse the escaping applied by [`normalize`].
///
/// Used by tests and diagnostics to verify that escaping is lossless.
pub fn unescape(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}
