//! Shared CSV line parsing
//!
//! Both source readers (local file and S3) delegate to this single routine so
//! the two origins can never drift apart in what they accept. The format is
//! `firstName,lastName,email[,...]`; fields past the third are ignored.

use crate::domain::Customer;

/// Outcome of parsing one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A header line; skipped wherever it occurs in the stream
    Header,

    /// A line with fewer than 3 comma-separated fields; logged and counted
    /// by the reader, never fatal
    Malformed,

    /// A well-formed customer record with trimmed fields
    Record(Customer),
}

/// Parse one line of customer CSV.
///
/// A line whose first comma-delimited field case-insensitively equals
/// `firstname` is treated as a header regardless of where it appears in the
/// stream. Trailing empty fields do not count toward the field total, so
/// `john,doe,` splits into two fields, not three; a line with fewer than 3
/// counted fields is malformed. Anything else yields a [`Customer`] with
/// whitespace-trimmed fields.
pub fn parse_line(line: &str) -> ParsedLine {
    let mut fields: Vec<&str> = line.split(',').collect();

    while fields.last() == Some(&"") {
        fields.pop();
    }

    let first = fields.first().copied().unwrap_or("");
    if first.trim().eq_ignore_ascii_case("firstname") {
        return ParsedLine::Header;
    }

    if fields.len() < 3 {
        return ParsedLine::Malformed;
    }

    ParsedLine::Record(Customer::new(
        fields[0].trim(),
        fields[1].trim(),
        fields[2].trim(),
    ))
}
