//! Segments: the tokenizer's view of the text.
//!
//! An analyzer splits a flat string into an ordered list of segments. Word
//! segments are tokens and get marked when projected; text segments are the
//! material between tokens and pass through as plain text.
//!
//! ## The Text Prefix
//!
//! Analyzers that emit line-delimited records tag text payloads with a
//! literal prefix so they can be told apart from words:
//!
//! ```text
//! {"w":"The"}   -> word "The"
//! {"t":": "}    -> text " "    (prefix ":" stripped)
//! {"t":":"}     -> text ""     (elided: existed only to carry the prefix)
//! ```
//!
//! The prefix is stripped at resolution time, not at decode time, so the
//! same segment list can be projected under different prefix conventions.

/// One atomic unit of a tokenizer's output.
///
/// A segment's identity is its position in the list, never its text: two
/// `Word("the")` segments at different positions are different segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A token. Rendered wrapped in a marker keyed by its index.
    Word(String),
    /// Separator material, stored raw (prefix not yet stripped).
    Text(String),
    /// A record that matched neither shape. Kept so that later segments
    /// retain their positions; the projector skips it.
    Invalid(String),
}

impl Segment {
    /// Create a word segment.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    /// Create a text segment from its raw payload.
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text(raw.into())
    }

    /// Whether this is a word segment.
    #[must_use]
    pub fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }

    /// Whether a text segment's raw payload carries `prefix`.
    ///
    /// Always `false` for words and invalid segments.
    #[must_use]
    pub fn is_prefixed(&self, prefix: Option<&str>) -> bool {
        match (self, prefix) {
            (Self::Text(raw), Some(p)) => !p.is_empty() && raw.starts_with(p),
            _ => false,
        }
    }

    /// Resolve the text this segment must match in the chunk stream.
    ///
    /// Returns `None` for invalid segments. An empty resolved text means
    /// the segment is elided.
    #[must_use]
    pub fn resolve(&self, prefix: Option<&str>) -> Option<Resolved<'_>> {
        match self {
            Self::Word(text) => Some(Resolved {
                text: text.as_str(),
                is_word: true,
            }),
            Self::Text(raw) => {
                let text = match prefix {
                    Some(p) if !p.is_empty() => raw.strip_prefix(p).unwrap_or(raw.as_str()),
                    _ => raw.as_str(),
                };
                Some(Resolved {
                    text,
                    is_word: false,
                })
            }
            Self::Invalid(_) => None,
        }
    }
}

/// A segment's text after prefix stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// The characters the segment covers.
    pub text: &'a str,
    /// Whether the covered characters are marked.
    pub is_word: bool,
}

impl Resolved<'_> {
    /// Whether this segment is elided (contributes no characters).
    #[must_use]
    pub fn is_elided(&self) -> bool {
        self.text.is_empty()
    }
}
