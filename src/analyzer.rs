//! A reference analyzer built on Unicode word boundaries.
//!
//! Real deployments plug a morphological analyzer in behind [`Analyzer`].
//! This one splits text at UAX #29 word boundaries and emits records in the
//! same shape, which is enough to drive the whole pipeline without an
//! external resource:
//!
//! ```text
//! "The cat."  ->  {"w":"The"} {"t":": "} {"w":"cat"} {"t":":."}
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::{AnalyzeSettings, Analyzer, Error, OutputFormat, Result};

/// Analyzer that treats every UAX #29 word as a token.
///
/// Text payloads carry [`AnalyzeSettings::text_prefix`], which
/// [`crate::Config`] keeps equal to the projector's prefix.
///
/// ## Example
///
/// ```rust
/// use tokmark::{decode_records, AnalyzeSettings, Analyzer, Segment, WordBoundaryAnalyzer};
///
/// let analyzer = WordBoundaryAnalyzer::default();
/// let records = analyzer.analyze("Hi, you", &AnalyzeSettings::default()).unwrap();
/// let decoded = decode_records(&records);
/// assert_eq!(decoded.segments[0], Segment::word("Hi"));
/// assert_eq!(decoded.segments[1], Segment::text(":, "));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordBoundaryAnalyzer;

impl Analyzer for WordBoundaryAnalyzer {
    fn analyze(&self, text: &str, settings: &AnalyzeSettings) -> Result<String> {
        if settings.output_format != OutputFormat::Jsonl {
            return Err(Error::UnsupportedFormat(settings.output_format));
        }

        let mut out = String::with_capacity(text.len() * 4);
        // Consecutive non-word pieces collapse into one text record.
        let mut gap = String::new();
        let prefix = settings.text_prefix.as_deref().unwrap_or_default();

        for piece in text.split_word_bounds() {
            if is_word_like(piece) {
                if !gap.is_empty() {
                    push_record(&mut out, text_record(prefix, &gap))?;
                    gap.clear();
                }
                let record = if settings.print_weights {
                    serde_json::json!({ "w": piece, "wt": 0.0 })
                } else {
                    serde_json::json!({ "w": piece })
                };
                push_record(&mut out, record)?;
            } else {
                gap.push_str(piece);
            }
        }
        if !gap.is_empty() {
            push_record(&mut out, text_record(prefix, &gap))?;
        }

        Ok(out)
    }
}

fn text_record(prefix: &str, gap: &str) -> serde_json::Value {
    serde_json::json!({ "t": format!("{prefix}{gap}") })
}

fn is_word_like(piece: &str) -> bool {
    piece.chars().any(char::is_alphanumeric)
}

fn push_record(out: &mut String, record: serde_json::Value) -> Result<()> {
    let line = serde_json::to_string(&record).map_err(|e| Error::Analyzer(e.to_string()))?;
    out.push_str(&line);
    out.push('\n');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_records, Segment};

    fn analyze(text: &str) -> Vec<Segment> {
        let records = WordBoundaryAnalyzer::default()
            .analyze(text, &AnalyzeSettings::default())
            .unwrap();
        decode_records(&records).segments
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            analyze("The cat."),
            vec![
                Segment::word("The"),
                Segment::text(": "),
                Segment::word("cat"),
                Segment::text(":."),
            ]
        );
    }

    #[test]
    fn test_gaps_collapse() {
        assert_eq!(
            analyze("a -- b"),
            vec![Segment::word("a"), Segment::text(": -- "), Segment::word("b")]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(analyze("").is_empty());
    }

    #[test]
    fn test_weights_optional() {
        let settings = AnalyzeSettings {
            print_weights: false,
            ..AnalyzeSettings::default()
        };
        let records = WordBoundaryAnalyzer::default()
            .analyze("cat", &settings)
            .unwrap();
        assert_eq!(records, "{\"w\":\"cat\"}\n");
    }

    #[test]
    fn test_prefix_from_settings() {
        let settings = AnalyzeSettings {
            text_prefix: Some("#".into()),
            ..AnalyzeSettings::default()
        };
        let records = WordBoundaryAnalyzer.analyze("a b", &settings).unwrap();
        assert_eq!(
            decode_records(&records).segments,
            vec![Segment::word("a"), Segment::text("# "), Segment::word("b")]
        );
    }

    #[test]
    fn test_no_prefix() {
        let settings = AnalyzeSettings {
            text_prefix: None,
            ..AnalyzeSettings::default()
        };
        let records = WordBoundaryAnalyzer.analyze("a.", &settings).unwrap();
        assert_eq!(
            decode_records(&records).segments,
            vec![Segment::word("a"), Segment::text(".")]
        );
    }

    #[test]
    fn test_unsupported_format() {
        let settings = AnalyzeSettings {
            output_format: OutputFormat::Cg,
            ..AnalyzeSettings::default()
        };
        let err = WordBoundaryAnalyzer::default()
            .analyze("cat", &settings)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(OutputFormat::Cg)));
    }
}
