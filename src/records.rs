//! Decoding line-delimited segment records.
//!
//! Analyzers hand back one JSON object per line:
//!
//! ```text
//! {"w":"The","wt":0.0}
//! {"t":": "}
//! {"w":"cat"}
//! ```
//!
//! Decoding never aborts. A line that is not JSON is dropped and reported.
//! A line that is JSON but has neither a `w` nor a `t` string is kept as
//! [`Segment::Invalid`] so every later record keeps its position, and that
//! position is the marker key.

use serde::Deserialize;

use crate::{Error, Segment};

/// The shape of one record. Unknown fields (weights, readings) are ignored.
#[derive(Debug, Deserialize)]
struct Record {
    w: Option<String>,
    t: Option<String>,
}

/// The outcome of decoding a record stream.
#[derive(Debug, Default)]
pub struct Decoded {
    /// Decoded segments, in record order.
    pub segments: Vec<Segment>,
    /// Problems encountered along the way.
    pub diagnostics: Vec<Error>,
}

impl Decoded {
    /// Whether every line decoded into a usable segment.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Decode a line-delimited record stream into segments.
///
/// Blank lines are skipped silently.
///
/// ```rust
/// use tokmark::{decode_records, Segment};
///
/// let decoded = decode_records("{\"w\":\"cat\"}\nnot json\n{\"t\":\":.\"}\n");
/// assert_eq!(decoded.segments, vec![Segment::word("cat"), Segment::text(":.")]);
/// assert_eq!(decoded.diagnostics.len(), 1);
/// ```
#[must_use]
pub fn decode_records(input: &str) -> Decoded {
    let mut decoded = Decoded::default();

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match decode_line(line) {
            Ok(Some(segment)) => decoded.segments.push(segment),
            Ok(None) => {
                log::warn!("record on line {line_no} has no segment payload: {line}");
                decoded.segments.push(Segment::Invalid(line.to_string()));
                decoded
                    .diagnostics
                    .push(Error::UnknownSegmentShape { line: line_no });
            }
            Err(source) => {
                log::warn!("dropping malformed record on line {line_no}: {source}");
                decoded.diagnostics.push(Error::MalformedRecord {
                    line: line_no,
                    source,
                });
            }
        }
    }

    log::debug!(
        "decoded {} segments ({} diagnostics)",
        decoded.segments.len(),
        decoded.diagnostics.len()
    );
    decoded
}

/// `Ok(None)` means valid JSON of the wrong shape.
fn decode_line(line: &str) -> std::result::Result<Option<Segment>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(line)?;
    if !value.is_object() {
        return Ok(None);
    }
    // Non-string `w`/`t` values are a shape problem, not a syntax one.
    let Ok(record) = Record::deserialize(&value) else {
        return Ok(None);
    };

    Ok(match (record.w, record.t) {
        (Some(w), _) => Some(Segment::Word(w)),
        (None, Some(t)) => Some(Segment::Text(t)),
        (None, None) => None,
    })
}
